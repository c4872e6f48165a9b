// system-tests/tests/suites/config_validation.rs
// ============================================================================
// Module: Config Validation Tests
// Description: Backend address discovery and timeout override coverage.
// Purpose: Ensure configuration resolution is strict and fail-closed.
// Dependencies: system-tests helpers
// ============================================================================

//! Configuration discovery tests for status-probe system-tests.

use std::fs;
use std::time::Duration;

use status_probe_config::ProbeConfig;
use status_probe_config::TIMEOUT_ENV_VAR;
use status_probe_config::resolve_timeout;
use tempfile::TempDir;

use crate::helpers;
use helpers::env;

#[test]
fn discovers_backend_address_from_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = env::lock();
    let dir = TempDir::new()?;
    let path = dir.path().join(".env");
    fs::write(&path, "WDS_SOCKET_PORT=443\nREACT_APP_BACKEND_URL=http://127.0.0.1:8001\n")?;

    let config = ProbeConfig::load(Some(&path))?;
    if config.base_url_str() != "http://127.0.0.1:8001" {
        return Err(format!("unexpected base url: {}", config.base_url_str()).into());
    }
    if config.timeout() != Duration::from_secs(10) {
        return Err(format!("unexpected default timeout: {:?}", config.timeout()).into());
    }
    Ok(())
}

#[test]
fn env_file_without_backend_key_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = env::lock();
    let dir = TempDir::new()?;
    let path = dir.path().join(".env");
    fs::write(&path, "WDS_SOCKET_PORT=443\n")?;

    match ProbeConfig::load(Some(&path)) {
        Err(error) if error.to_string().contains("no REACT_APP_BACKEND_URL line found") => Ok(()),
        Err(error) => Err(format!("unexpected error: {error}").into()),
        Ok(_) => Err("expected discovery to fail without the backend key".into()),
    }
}

#[test]
fn timeout_override_acts_as_a_minimum() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = env::lock();
    let requested = Duration::from_secs(10);

    env::set_var(TIMEOUT_ENV_VAR, "30");
    let raised = resolve_timeout(requested);
    env::set_var(TIMEOUT_ENV_VAR, "1");
    let kept = resolve_timeout(requested);
    env::set_var(TIMEOUT_ENV_VAR, "soon");
    let invalid = resolve_timeout(requested);
    env::remove_var(TIMEOUT_ENV_VAR);
    let unset = resolve_timeout(requested);

    if raised? != Duration::from_secs(30) {
        return Err("override larger than the request must win".into());
    }
    if kept? != requested {
        return Err("override must never shorten the requested timeout".into());
    }
    if invalid.is_ok() {
        return Err("non-numeric override must fail closed".into());
    }
    if unset? != requested {
        return Err("absent override must leave the request unchanged".into());
    }
    Ok(())
}
