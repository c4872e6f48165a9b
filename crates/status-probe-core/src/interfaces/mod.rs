// crates/status-probe-core/src/interfaces/mod.rs
// ============================================================================
// Module: Status Probe Interfaces
// Description: Transport-agnostic interface to the backend under probe.
// Purpose: Define the contract surface used by the suite runtime.
// Dependencies: crate::core, async-trait
// ============================================================================

//! ## Overview
//! The suite runtime drives the backend through [`StatusApi`] without knowing
//! the transport. Implementations must map every transport-level problem into
//! an [`ApiFailure`] so the runner can classify it; they never panic and never
//! retry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::core::contract::GreetingResponse;
use crate::core::contract::StatusCheckCreate;
use crate::core::contract::StatusCheckRecord;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures surfaced by [`StatusApi`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    /// Request could not be sent or timed out.
    #[error("request failed: {0}")]
    Connectivity(String),
    /// Response body could not be decoded into the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// Response carried an HTTP status outside the operation's contract.
    #[error("unexpected status {status}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
    },
}

// ============================================================================
// SECTION: Status API
// ============================================================================

/// Transport-agnostic view of the backend under probe.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Fetches the root greeting (`GET /api/`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure`] on transport errors, undecodable bodies, or a
    /// non-200 status.
    async fn fetch_greeting(&self) -> Result<GreetingResponse, ApiFailure>;

    /// Creates a status check record (`POST /api/status`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure`] on transport errors, undecodable bodies, or a
    /// non-200 status.
    async fn create_status_check(
        &self,
        request: &StatusCheckCreate,
    ) -> Result<StatusCheckRecord, ApiFailure>;

    /// Posts an arbitrary JSON payload to the create endpoint and returns the
    /// raw HTTP status code.
    ///
    /// Client-error statuses are data here, not failures; only transport
    /// errors are reported as [`ApiFailure`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure::Connectivity`] when the request cannot complete.
    async fn submit_raw_status_payload(&self, payload: &Value) -> Result<u16, ApiFailure>;

    /// Lists all status check records (`GET /api/status`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure`] on transport errors, undecodable bodies, or a
    /// non-200 status.
    async fn list_status_checks(&self) -> Result<Vec<StatusCheckRecord>, ApiFailure>;
}
