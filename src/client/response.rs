// src/client/response.rs
// ============================================================================
// Module: API Response Wrapper
// Description: Uniform view over pet-store API responses.
// Purpose: Expose status predicates and Err-returning status assertions.
// Dependencies: reqwest, serde_json
// ============================================================================

//! ## Overview
//! [`ApiResponse`] holds the raw status, headers, best-effort parsed JSON
//! body, and raw text of one HTTP exchange. A body that is not valid JSON is
//! not an error: the parsed view degrades to `None` and only code that
//! dereferences expected fields will fail later. Assertion operations return
//! `Err` with the actual status and any API-provided error message so that
//! test bodies can propagate failures with `?`.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Uniform wrapper over one pet-store API response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Raw HTTP status.
    status: StatusCode,
    /// Response headers.
    headers: HeaderMap,
    /// Best-effort parsed JSON body; `None` when the body is not valid JSON.
    json: Option<Value>,
    /// Raw response text.
    text: String,
}

impl ApiResponse {
    /// Builds a response wrapper from already-read response parts.
    #[must_use]
    pub fn from_parts(status: StatusCode, headers: HeaderMap, text: String) -> Self {
        let json = serde_json::from_str(&text).ok();
        Self {
            status,
            headers,
            json,
            text,
        }
    }

    /// Returns the raw HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the numeric status code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the parsed JSON body, when the body was valid JSON.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// Returns the raw response text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true for 2xx responses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns true for 4xx responses.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// Returns true for 5xx responses.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Extracts an error message from the response body.
    ///
    /// Prefers a non-empty top-level `message` field, then `error`, falling
    /// back to the raw text when neither is present.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        if let Some(Value::Object(map)) = &self.json {
            for key in ["message", "error"] {
                if let Some(Value::String(text)) = map.get(key) {
                    if !text.is_empty() {
                        return Some(text.clone());
                    }
                }
            }
        }
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.clone())
        }
    }

    /// Fails with a descriptive message unless the response is 2xx.
    ///
    /// # Errors
    ///
    /// Returns an error naming the context, the actual status, and any
    /// extracted API error message when the status is not 2xx.
    pub fn ensure_success(&self, context: &str) -> Result<(), String> {
        if self.is_success() {
            return Ok(());
        }
        Err(format!(
            "{context}: expected success status, got {}: {}",
            self.status_code(),
            self.error_message().unwrap_or_else(|| "<empty body>".to_string())
        ))
    }

    /// Fails with a descriptive message unless the status equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the context, the expected and actual status,
    /// and any extracted API error message on mismatch.
    pub fn ensure_status(&self, expected: u16, context: &str) -> Result<(), String> {
        if self.status_code() == expected {
            return Ok(());
        }
        Err(format!(
            "{context}: expected status {expected}, got {}: {}",
            self.status_code(),
            self.error_message().unwrap_or_else(|| "<empty body>".to_string())
        ))
    }
}
