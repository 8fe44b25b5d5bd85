// src/config/mod.rs
// ============================================================================
// Module: Conformance Configuration
// Description: Centralized configuration for petstore conformance tests.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Conformance configuration is read from environment variables and mapped
//! into a small typed structure, constructed once per test session. Malformed
//! values fail at session start rather than propagating into test bodies.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::ConformanceConfig;
pub use env::ConformanceEnv;
pub use env::read_env_strict;
