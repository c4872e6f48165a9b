// crates/status-probe-core/src/runtime/mod.rs
// ============================================================================
// Module: Status Probe Runtime
// Description: Sequential execution of the probe check suite.
// Purpose: Drive a StatusApi through the ordered checks and build the report.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime executes the four probe checks strictly sequentially and
//! converts every interface failure into a classified check outcome. Later
//! checks always run regardless of earlier failures; the only state carried
//! between checks is the record id handed from create to list.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod suite;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use suite::RunContext;
pub use suite::SuiteRunner;
