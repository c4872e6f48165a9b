// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized timeout configuration with env overrides.
// Purpose: Keep system-test timeouts consistent and configurable across suites.
// Dependencies: system-tests
// ============================================================================

use std::time::Duration;

use system_tests::config::SystemTestConfig;

/// Default timeout for stub-backed probe requests.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Returns the effective timeout, honoring `STATUS_PROBE_SYSTEM_TEST_TIMEOUT_SEC`
/// when set. The override acts as a minimum to avoid shortening explicitly
/// longer test timeouts.
///
/// # Errors
///
/// Returns an error when the override is present but invalid.
pub fn resolve_timeout(requested: Duration) -> Result<Duration, String> {
    let config = SystemTestConfig::load()?;
    Ok(config.timeout.map_or(requested, |override_timeout| {
        std::cmp::max(requested, override_timeout)
    }))
}
