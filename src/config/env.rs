// src/config/env.rs
// ============================================================================
// Module: Conformance Environment
// Description: Environment-backed configuration for conformance tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8, empty values, and malformed
//! numbers or booleans fail closed at session start.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default base URL for the target pet-store API.
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for conformance test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConformanceEnv {
    /// Base URL of the target pet-store API.
    BaseUrl,
    /// Per-request timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Verify TLS certificates (`true`/`false` or `1`/`0`).
    VerifyTls,
    /// Optional artifact run-root override.
    RunRoot,
}

impl ConformanceEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "PETSTORE_BASE_URL",
            Self::TimeoutSeconds => "PETSTORE_TIMEOUT_SEC",
            Self::VerifyTls => "PETSTORE_VERIFY_TLS",
            Self::RunRoot => "PETSTORE_RUN_ROOT",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed conformance configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceConfig {
    /// Base URL of the target pet-store API.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Verify TLS certificates when connecting.
    pub verify_tls: bool,
    /// Optional artifact run-root override.
    pub run_root: Option<PathBuf>,
}

impl ConformanceConfig {
    /// Loads configuration from environment variables, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, an unparseable base URL,
    /// an invalid timeout, or an unrecognized boolean value).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(ConformanceEnv::BaseUrl.as_str())?
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(base_url.trim()).map_err(|err| {
            format!("{} must be a valid URL: {err}", ConformanceEnv::BaseUrl.as_str())
        })?;
        let timeout = read_env_nonempty(ConformanceEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(ConformanceEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let verify_tls = parse_bool_env(
            ConformanceEnv::VerifyTls.as_str(),
            read_env_nonempty(ConformanceEnv::VerifyTls.as_str())?,
        )?;
        let run_root = read_env_nonempty(ConformanceEnv::RunRoot.as_str())?.map(PathBuf::from);
        Ok(Self {
            base_url,
            timeout,
            verify_tls,
            run_root,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean environment variable, defaulting to `false` when unset.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
