// crates/status-probe-core/src/core/mod.rs
// ============================================================================
// Module: Status Probe Core Types
// Description: Canonical contract and check-model structures.
// Purpose: Provide stable, serializable types for probe runs and reports.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the wire contract of the backend under probe, the check
//! identifiers, and the report structures. These types are the canonical
//! source of truth for rendered output (text or canonical JSON).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod checks;
pub mod contract;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use checks::CheckFailure;
pub use checks::CheckId;
pub use checks::CheckOutcome;
pub use checks::CheckStatus;
pub use checks::ProbeReport;
pub use contract::ContractError;
pub use contract::EXPECTED_GREETING;
pub use contract::GreetingResponse;
pub use contract::StatusCheckCreate;
pub use contract::StatusCheckRecord;
