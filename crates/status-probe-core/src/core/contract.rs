// crates/status-probe-core/src/core/contract.rs
// ============================================================================
// Module: Backend Wire Contract
// Description: Serialized shapes exchanged with the backend under probe.
// Purpose: Provide canonical request and response types with validation.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! The backend under probe exposes three endpoints: a root greeting, a status
//! check create, and a status check list. This module defines the request and
//! response shapes for those endpoints together with the validation rules the
//! probe asserts against. Responses are untrusted input; validation fails
//! closed on missing or malformed fields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Greeting message the root endpoint must return.
pub const EXPECTED_GREETING: &str = "Hello World";

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// Response body of the root greeting endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    /// Greeting message; must equal [`EXPECTED_GREETING`].
    pub message: String,
}

impl GreetingResponse {
    /// Returns whether the greeting matches the expected contract value.
    #[must_use]
    pub fn matches_contract(&self) -> bool {
        self.message == EXPECTED_GREETING
    }
}

/// Request body for creating a status check record.
///
/// # Invariants
/// - `client_name` is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    /// Free-form client name recorded by the backend.
    pub client_name: String,
}

impl StatusCheckCreate {
    /// Creates a validated request body.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::EmptyClientName`] when the name is empty or
    /// whitespace-only.
    pub fn new(client_name: impl Into<String>) -> Result<Self, ContractError> {
        let client_name = client_name.into();
        if client_name.trim().is_empty() {
            return Err(ContractError::EmptyClientName);
        }
        Ok(Self {
            client_name,
        })
    }
}

/// Status check record as echoed and listed by the backend.
///
/// # Invariants
/// - `id` is opaque, unique, and assigned by the backend.
/// - `timestamp` is an RFC 3339 date-time string assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheckRecord {
    /// Server-assigned opaque identifier.
    pub id: String,
    /// Client name echoed from the create request.
    pub client_name: String,
    /// Server-assigned creation timestamp (RFC 3339).
    pub timestamp: String,
}

impl StatusCheckRecord {
    /// Validates the record against the contract invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractError`] naming the first violated invariant.
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.id.trim().is_empty() {
            return Err(ContractError::EmptyId);
        }
        if self.client_name.trim().is_empty() {
            return Err(ContractError::EmptyClientName);
        }
        self.parsed_timestamp().map(|_| ())
    }

    /// Parses the server-assigned timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidTimestamp`] when the value is not
    /// RFC 3339.
    pub fn parsed_timestamp(&self) -> Result<OffsetDateTime, ContractError> {
        OffsetDateTime::parse(&self.timestamp, &Rfc3339).map_err(|err| {
            ContractError::InvalidTimestamp {
                value: self.timestamp.clone(),
                detail: err.to_string(),
            }
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Wire contract violations detected during validation.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Record identifier is missing or empty.
    #[error("record id is empty")]
    EmptyId,
    /// Client name is missing or whitespace-only.
    #[error("client_name is empty")]
    EmptyClientName,
    /// Timestamp is not a valid RFC 3339 date-time.
    #[error("timestamp {value:?} is not RFC 3339: {detail}")]
    InvalidTimestamp {
        /// Raw timestamp value received from the backend.
        value: String,
        /// Parser detail message.
        detail: String,
    },
}
