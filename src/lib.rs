// src/lib.rs
// ============================================================================
// Module: Petstore Conformance Library
// Description: Shared configuration, HTTP client, and validators for the suite.
// Purpose: Provide common utilities for petstore conformance test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the configuration, request/response helpers, and
//! structural validators used by the conformance test binaries in `tests/`.
//! The target pet-store API is an external collaborator; responses from it
//! are untrusted and are only ever inspected, never trusted for control flow
//! beyond status and field-presence checks.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod validate;
