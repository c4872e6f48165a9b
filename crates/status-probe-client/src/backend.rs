// crates/status-probe-client/src/backend.rs
// ============================================================================
// Module: Backend HTTP Client
// Description: reqwest-backed implementation of the StatusApi interface.
// Purpose: Issue probe requests with timeouts and classified failures.
// Dependencies: reqwest, serde_json, status-probe-core
// ============================================================================

//! ## Overview
//! [`BackendClient`] drives the backend under probe over HTTP. Responses are
//! untrusted: bodies are decoded strictly into the core contract types and
//! every transport or decode problem becomes an [`ApiFailure`] for the runner
//! to classify. Status codes outside an operation's contract are reported as
//! [`ApiFailure::UnexpectedStatus`], except for the raw-payload submission
//! where the status code itself is the observation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::Response;
use reqwest::StatusCode;
use serde_json::Value;
use status_probe_core::ApiFailure;
use status_probe_core::GreetingResponse;
use status_probe_core::StatusApi;
use status_probe_core::StatusCheckCreate;
use status_probe_core::StatusCheckRecord;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Path of the root greeting endpoint, relative to the base address.
const GREETING_PATH: &str = "/api/";
/// Path of the status check create/list endpoint, relative to the base address.
const STATUS_PATH: &str = "/api/status";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Client construction errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    Build(String),
}

// ============================================================================
// SECTION: Backend Client
// ============================================================================

/// HTTP client for the backend under probe.
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base address without a trailing slash.
    base_url: String,
    /// Underlying HTTP client configured with the probe timeout.
    client: Client,
}

impl BackendClient {
    /// Creates a client for a base address with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] when the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    /// Creates a client from an existing reqwest client.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client,
        }
    }

    /// Returns the base address the client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path onto the base address.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Requires a 200 response and decodes the body into `T`.
    async fn decode_ok<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiFailure> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiFailure::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        response.json::<T>().await.map_err(|err| ApiFailure::Decode(err.to_string()))
    }
}

#[async_trait]
impl StatusApi for BackendClient {
    async fn fetch_greeting(&self) -> Result<GreetingResponse, ApiFailure> {
        let response = self
            .client
            .get(self.endpoint(GREETING_PATH))
            .send()
            .await
            .map_err(|err| ApiFailure::Connectivity(err.to_string()))?;
        Self::decode_ok(response).await
    }

    async fn create_status_check(
        &self,
        request: &StatusCheckCreate,
    ) -> Result<StatusCheckRecord, ApiFailure> {
        let response = self
            .client
            .post(self.endpoint(STATUS_PATH))
            .json(request)
            .send()
            .await
            .map_err(|err| ApiFailure::Connectivity(err.to_string()))?;
        Self::decode_ok(response).await
    }

    async fn submit_raw_status_payload(&self, payload: &Value) -> Result<u16, ApiFailure> {
        let response = self
            .client
            .post(self.endpoint(STATUS_PATH))
            .json(payload)
            .send()
            .await
            .map_err(|err| ApiFailure::Connectivity(err.to_string()))?;
        Ok(response.status().as_u16())
    }

    async fn list_status_checks(&self) -> Result<Vec<StatusCheckRecord>, ApiFailure> {
        let response = self
            .client
            .get(self.endpoint(STATUS_PATH))
            .send()
            .await
            .map_err(|err| ApiFailure::Connectivity(err.to_string()))?;
        Self::decode_ok(response).await
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
