// src/client/mod.rs
// ============================================================================
// Module: Petstore Client
// Description: HTTP request execution and response wrapping for the suite.
// Purpose: Provide uniform request helpers over a session-scoped client.
// Dependencies: reqwest, serde, serde_json, url
// ============================================================================

//! ## Overview
//! The client module issues GET/POST/PUT/DELETE requests against the target
//! pet-store API and wraps every response in [`ApiResponse`], a uniform view
//! over status, headers, best-effort parsed JSON, and raw text. Exchanges are
//! captured in a transcript for test artifacts.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod http;
mod response;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use http::PetstoreClient;
pub use http::TranscriptEntry;
pub use response::ApiResponse;
