// tests/helpers/mod.rs
// ============================================================================
// Module: Conformance Test Helpers
// Description: Shared helpers for the petstore conformance suites.
// Purpose: Provide session setup, cleanup tracking, fixtures, and artifacts.
// Dependencies: petstore-conformance, rand, serde, serde_jcs, time
// ============================================================================

//! ## Overview
//! Shared helpers for the petstore conformance suites.
//! Invariants:
//! - Test assertions fail via `Err`, never panic, so cleanup always runs.
//! - Responses from the target API are treated as untrusted input.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]


#[cfg(test)]
mod fixtures_tests;
