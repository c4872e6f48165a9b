// crates/status-probe-core/src/core/checks.rs
// ============================================================================
// Module: Check Model
// Description: Check identifiers, outcomes, and the probe report.
// Purpose: Provide stable shapes for rendered and serialized probe results.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Each probe run executes a fixed ordered sequence of checks. A check either
//! passes or fails with a classified [`CheckFailure`]; the ordered outcomes
//! form the [`ProbeReport`]. Checks are atomic and independent apart from the
//! record id handed from the create check to the list check.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Stable identifiers for the probe checks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// Root greeting probe (`GET /api/`).
    RootGreeting,
    /// Status check creation (`POST /api/status`).
    CreateStatusCheck,
    /// Status check listing (`GET /api/status`).
    ListStatusChecks,
    /// Validation rejection for an empty payload (`POST /api/status`).
    RejectEmptyPayload,
}

impl CheckId {
    /// Returns all checks in execution order.
    #[must_use]
    pub const fn ordered() -> [Self; 4] {
        [
            Self::RootGreeting,
            Self::CreateStatusCheck,
            Self::ListStatusChecks,
            Self::RejectEmptyPayload,
        ]
    }

    /// Returns the stable wire label for the check.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RootGreeting => "root_greeting",
            Self::CreateStatusCheck => "create_status_check",
            Self::ListStatusChecks => "list_status_checks",
            Self::RejectEmptyPayload => "reject_empty_payload",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Pass/fail status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The check satisfied its contract.
    Pass,
    /// The check violated its contract or could not complete.
    Fail,
}

/// Classified failure for a single check.
///
/// The taxonomy mirrors how failures surface to operators: the request could
/// not complete, the response violated the contract, or the probe itself was
/// misconfigured before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum CheckFailure {
    /// Request could not be sent, timed out, or the body was undecodable.
    #[error("connectivity failure: {0}")]
    Connectivity(String),
    /// Response status or body did not match the expected contract.
    #[error("assertion failure: {0}")]
    Assertion(String),
    /// Probe configuration prevented the check from being issued.
    #[error("configuration failure: {0}")]
    Configuration(String),
}

/// Outcome of a single executed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Check identifier.
    pub check: CheckId,
    /// Pass/fail status.
    pub status: CheckStatus,
    /// Failure classification and message when the check failed.
    pub failure: Option<CheckFailure>,
}

impl CheckOutcome {
    /// Builds a passing outcome.
    #[must_use]
    pub const fn pass(check: CheckId) -> Self {
        Self {
            check,
            status: CheckStatus::Pass,
            failure: None,
        }
    }

    /// Builds a failing outcome with a classified failure.
    #[must_use]
    pub const fn fail(check: CheckId, failure: CheckFailure) -> Self {
        Self {
            check,
            status: CheckStatus::Fail,
            failure: Some(failure),
        }
    }

    /// Returns whether the check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Ordered outcomes of one probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Backend base address the run probed.
    pub base_url: String,
    /// Client name used for the create check.
    pub client_name: String,
    /// Record id captured by the create check, when it succeeded.
    pub created_id: Option<String>,
    /// Check outcomes in execution order.
    pub outcomes: Vec<CheckOutcome>,
}

impl ProbeReport {
    /// Returns whether every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Returns the number of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| !outcome.passed()).count()
    }
}
