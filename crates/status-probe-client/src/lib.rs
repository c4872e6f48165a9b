// crates/status-probe-client/src/lib.rs
// ============================================================================
// Module: Status Probe Client Library
// Description: Public API surface for the backend HTTP client.
// Purpose: Expose the reqwest-backed StatusApi implementation.
// Dependencies: crate::backend
// ============================================================================

//! ## Overview
//! The client crate binds the transport-agnostic [`status_probe_core::StatusApi`]
//! interface to a live backend over HTTP. Every transport problem is mapped
//! into the core failure taxonomy; the client never retries and never panics.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod backend;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use backend::BackendClient;
pub use backend::ClientError;
