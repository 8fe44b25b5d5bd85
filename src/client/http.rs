// src/client/http.rs
// ============================================================================
// Module: Petstore HTTP Client
// Description: Session-scoped HTTP client with transcript capture.
// Purpose: Issue GET/POST/PUT/DELETE requests against the pet-store API.
// Dependencies: reqwest, serde, serde_json, url
// ============================================================================

//! ## Overview
//! [`PetstoreClient`] wraps a pre-built `reqwest::Client` and the configured
//! base URL. Each operation sends one request, reads the full body, and
//! returns an [`ApiResponse`]; transport failures surface as `Err`. Every
//! exchange is appended to a transcript for test artifacts.

use std::sync::Arc;
use std::sync::Mutex;

use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::response::ApiResponse;
use crate::config::ConformanceConfig;

/// Maximum body length preserved per transcript entry.
const TRANSCRIPT_BODY_LIMIT: usize = 2048;

/// One recorded HTTP exchange.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// Monotonic sequence number within the owning client.
    pub sequence: u64,
    /// HTTP method of the request.
    pub method: String,
    /// Full request URL.
    pub url: String,
    /// Numeric response status.
    pub status: u16,
    /// Response body: parsed JSON when valid, else truncated raw text.
    pub body: Value,
}

/// Session-scoped pet-store client with transcript capture.
#[derive(Debug, Clone)]
pub struct PetstoreClient {
    /// Configured base URL of the target API.
    base_url: Url,
    /// Underlying HTTP client, read-only after construction.
    client: Client,
    /// Recorded exchanges, shared across clones.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl PetstoreClient {
    /// Builds a client from session configuration.
    ///
    /// Requests carry JSON content-type and accept headers and honor the
    /// configured timeout. When TLS verification is disabled the client
    /// accepts invalid certificates, matching the suite's default posture
    /// against local test deployments.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: &ConformanceConfig) -> Result<Self, String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut builder =
            Client::builder().timeout(config.timeout).default_headers(headers);
        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client =
            builder.build().map_err(|err| format!("failed to build http client: {err}"))?;
        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Issues a GET request with optional query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an invalid endpoint path.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse, String> {
        let url = self.endpoint_url(path)?;
        let mut request = self.client.get(url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute("GET", &url, request).await
    }

    /// Issues a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an invalid endpoint path.
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, String> {
        let url = self.endpoint_url(path)?;
        let request = self.client.post(url.clone()).json(body);
        self.execute("POST", &url, request).await
    }

    /// Issues a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an invalid endpoint path.
    pub async fn put_json(&self, path: &str, body: &Value) -> Result<ApiResponse, String> {
        let url = self.endpoint_url(path)?;
        let request = self.client.put(url.clone()).json(body);
        self.execute("PUT", &url, request).await
    }

    /// Issues a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an invalid endpoint path.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, String> {
        let url = self.endpoint_url(path)?;
        let request = self.client.delete(url.clone());
        self.execute("DELETE", &url, request).await
    }

    /// Joins a resource path onto the configured base URL.
    fn endpoint_url(&self, path: &str) -> Result<Url, String> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| format!("base URL {} cannot carry paths", self.base_url))?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|segment| !segment.is_empty()) {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// Sends the request, reads the body, and records the exchange.
    async fn execute(
        &self,
        method: &'static str,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<ApiResponse, String> {
        let response =
            request.send().await.map_err(|err| format!("{method} {url} failed: {err}"))?;
        let status = response.status();
        let headers = response.headers().clone();
        let text = response
            .text()
            .await
            .map_err(|err| format!("{method} {url}: failed to read body: {err}"))?;
        let wrapped = ApiResponse::from_parts(status, headers, text);
        self.record(method, url, &wrapped);
        Ok(wrapped)
    }

    /// Appends one exchange to the transcript.
    fn record(&self, method: &str, url: &Url, response: &ApiResponse) {
        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        let body = response.json().cloned().unwrap_or_else(|| {
            Value::String(response.text().chars().take(TRANSCRIPT_BODY_LIMIT).collect())
        });
        guard.push(TranscriptEntry {
            sequence,
            method: method.to_string(),
            url: url.to_string(),
            status: response.status_code(),
            body,
        });
    }
}
