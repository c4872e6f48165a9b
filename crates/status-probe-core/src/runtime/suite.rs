// crates/status-probe-core/src/runtime/suite.rs
// ============================================================================
// Module: Suite Runner
// Description: Ordered execution of the probe checks against a StatusApi.
// Purpose: Produce a ProbeReport with classified per-check outcomes.
// Dependencies: crate::{core, interfaces}, serde_json
// ============================================================================

//! ## Overview
//! The runner issues the greeting, create, list, and rejection checks in a
//! fixed order. Each check is atomic: it either passes or fails with a
//! classified message, and no check is retried. The runner never reads
//! wall-clock time; the caller supplies the run-unique client name through
//! [`RunContext`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::core::checks::CheckFailure;
use crate::core::checks::CheckId;
use crate::core::checks::CheckOutcome;
use crate::core::checks::ProbeReport;
use crate::core::contract::ContractError;
use crate::core::contract::EXPECTED_GREETING;
use crate::core::contract::StatusCheckCreate;
use crate::interfaces::ApiFailure;
use crate::interfaces::StatusApi;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Status codes accepted by the empty-payload rejection check.
const ACCEPTED_REJECTION_STATUSES: [u16; 2] = [400, 422];

// ============================================================================
// SECTION: Run Context
// ============================================================================

/// Caller-supplied inputs for one probe run.
///
/// # Invariants
/// - `client_name` is non-empty and unique per run; hosts derive it from the
///   current timestamp so repeated runs never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Client name submitted by the create check.
    client_name: String,
}

impl RunContext {
    /// Creates a run context with a validated client name.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::EmptyClientName`] when the name is empty or
    /// whitespace-only.
    pub fn new(client_name: impl Into<String>) -> Result<Self, ContractError> {
        let request = StatusCheckCreate::new(client_name)?;
        Ok(Self {
            client_name: request.client_name,
        })
    }

    /// Returns the client name for this run.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }
}

// ============================================================================
// SECTION: Suite Runner
// ============================================================================

/// Sequential runner for the probe check suite.
#[derive(Debug, Clone)]
pub struct SuiteRunner {
    /// Backend base address recorded in the report.
    base_url: String,
}

impl SuiteRunner {
    /// Creates a runner for the given backend base address.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Executes all checks in order and returns the report.
    pub async fn run(&self, api: &dyn StatusApi, ctx: &RunContext) -> ProbeReport {
        let mut outcomes = Vec::with_capacity(CheckId::ordered().len());
        outcomes.push(check_root_greeting(api).await);
        let (create_outcome, created_id) = check_create_status(api, ctx).await;
        outcomes.push(create_outcome);
        outcomes.push(check_list_status(api, created_id.as_deref()).await);
        outcomes.push(check_reject_empty_payload(api).await);
        ProbeReport {
            base_url: self.base_url.clone(),
            client_name: ctx.client_name.clone(),
            created_id,
            outcomes,
        }
    }
}

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Greeting probe: requires status 200 and the fixed greeting message.
async fn check_root_greeting(api: &dyn StatusApi) -> CheckOutcome {
    let check = CheckId::RootGreeting;
    match api.fetch_greeting().await {
        Ok(greeting) if greeting.matches_contract() => CheckOutcome::pass(check),
        Ok(greeting) => CheckOutcome::fail(
            check,
            CheckFailure::Assertion(format!(
                "greeting message {:?} does not equal {EXPECTED_GREETING:?}",
                greeting.message
            )),
        ),
        Err(failure) => CheckOutcome::fail(check, classify(failure)),
    }
}

/// Create probe: requires an echoed name, a non-empty id, and a parseable
/// timestamp. Returns the captured id for the list check.
async fn check_create_status(
    api: &dyn StatusApi,
    ctx: &RunContext,
) -> (CheckOutcome, Option<String>) {
    let check = CheckId::CreateStatusCheck;
    let request = StatusCheckCreate {
        client_name: ctx.client_name.clone(),
    };
    let record = match api.create_status_check(&request).await {
        Ok(record) => record,
        Err(failure) => return (CheckOutcome::fail(check, classify(failure)), None),
    };
    if let Err(violation) = record.validate() {
        let failure = CheckFailure::Assertion(format!("created record is invalid: {violation}"));
        return (CheckOutcome::fail(check, failure), None);
    }
    if record.client_name != ctx.client_name {
        let failure = CheckFailure::Assertion(format!(
            "echoed client_name {:?} does not equal submitted {:?}",
            record.client_name, ctx.client_name
        ));
        return (CheckOutcome::fail(check, failure), None);
    }
    (CheckOutcome::pass(check), Some(record.id))
}

/// List probe: requires an array body; asserts membership of the captured id
/// when the create check produced one.
async fn check_list_status(api: &dyn StatusApi, created_id: Option<&str>) -> CheckOutcome {
    let check = CheckId::ListStatusChecks;
    let records = match api.list_status_checks().await {
        Ok(records) => records,
        Err(failure) => return CheckOutcome::fail(check, classify(failure)),
    };
    let Some(created_id) = created_id else {
        return CheckOutcome::pass(check);
    };
    if records.iter().any(|record| record.id == created_id) {
        CheckOutcome::pass(check)
    } else {
        CheckOutcome::fail(
            check,
            CheckFailure::Assertion(format!(
                "created id {created_id:?} absent from listing of {} records",
                records.len()
            )),
        )
    }
}

/// Rejection probe: an empty payload must yield 400 or 422, never success.
async fn check_reject_empty_payload(api: &dyn StatusApi) -> CheckOutcome {
    let check = CheckId::RejectEmptyPayload;
    let payload: Value = json!({});
    match api.submit_raw_status_payload(&payload).await {
        Ok(status) if ACCEPTED_REJECTION_STATUSES.contains(&status) => CheckOutcome::pass(check),
        Ok(status) => CheckOutcome::fail(
            check,
            CheckFailure::Assertion(format!("expected status 400 or 422, got {status}")),
        ),
        Err(failure) => CheckOutcome::fail(check, classify(failure)),
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps an interface failure into the report taxonomy.
fn classify(failure: ApiFailure) -> CheckFailure {
    match failure {
        ApiFailure::Connectivity(detail) => CheckFailure::Connectivity(detail),
        ApiFailure::Decode(detail) => {
            CheckFailure::Connectivity(format!("response decode failed: {detail}"))
        }
        ApiFailure::UnexpectedStatus {
            status,
        } => CheckFailure::Assertion(format!("unexpected status {status}")),
    }
}
