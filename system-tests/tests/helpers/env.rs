// system-tests/tests/helpers/env.rs
// ============================================================================
// Module: Test Environment Helpers
// Description: Safe wrappers for test-only environment mutation.
// Purpose: Centralize env var changes with explicit safety notes.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Safe wrappers for test-only environment mutation.
//! Invariants:
//! - System-test execution is deterministic and fail-closed.
//! - Callers restore mutated variables before the test returns.

#![allow(unsafe_code, reason = "Test harness mutates process env for configuration.")]

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;

/// Serializes env mutation across tests sharing one process.
pub fn lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Sets an environment variable for the current process.
pub fn set_var(key: &str, value: &str) {
    // SAFETY: Tests control process lifecycle and mutate env vars sequentially.
    unsafe {
        std::env::set_var(key, value);
    }
}

/// Removes an environment variable from the current process.
pub fn remove_var(key: &str) {
    // SAFETY: Tests cleanup env vars after use in a controlled process.
    unsafe {
        std::env::remove_var(key);
    }
}
