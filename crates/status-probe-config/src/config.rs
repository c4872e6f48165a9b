// crates/status-probe-config/src/config.rs
// ============================================================================
// Module: Probe Configuration
// Description: Backend address discovery and timeout resolution.
// Purpose: Provide strict, fail-closed env-file parsing with hard limits.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! Configuration is loaded from an environment file with strict size and path
//! limits. The backend base address comes from the first
//! `REACT_APP_BACKEND_URL=<url>` line; missing or invalid configuration fails
//! closed so the probe reports a configuration failure instead of issuing
//! requests against an unintended target.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default environment file consulted when no path is specified.
pub const DEFAULT_ENV_FILE: &str = "frontend/.env";
/// Environment variable used to override the env-file path.
pub const ENV_FILE_ENV_VAR: &str = "STATUS_PROBE_ENV_FILE";
/// Key whose value carries the backend base address.
pub const BACKEND_URL_KEY: &str = "REACT_APP_BACKEND_URL";
/// Environment variable carrying a minimum request timeout in seconds.
pub const TIMEOUT_ENV_VAR: &str = "STATUS_PROBE_TIMEOUT_SEC";
/// Maximum environment file size in bytes.
pub(crate) const MAX_ENV_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default request timeout applied when no override is present.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// SECTION: Probe Config
// ============================================================================

/// Resolved probe configuration.
///
/// # Invariants
/// - `base_url` is an absolute `http` or `https` URL with a host; the
///   string form exposed by [`ProbeConfig::base_url_str`] carries no
///   trailing slash so endpoint paths join deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Backend base address under which `/api/...` endpoints are reached.
    base_url: Url,
    /// Request timeout for probe HTTP calls.
    timeout: Duration,
}

impl ProbeConfig {
    /// Loads configuration from an environment file using the default
    /// resolution rules (explicit path, then [`ENV_FILE_ENV_VAR`], then
    /// [`DEFAULT_ENV_FILE`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_ENV_FILE_SIZE {
            return Err(ConfigError::Invalid("env file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("env file must be utf-8".to_string()))?;
        let raw_url = extract_backend_url(content)?;
        Self::from_base_url(&raw_url)
    }

    /// Builds configuration from an explicit base address string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the address is not an absolute
    /// `http`/`https` URL or the timeout override is invalid.
    pub fn from_base_url(raw_url: &str) -> Result<Self, ConfigError> {
        let base_url = validate_base_url(raw_url)?;
        let timeout = resolve_timeout(DEFAULT_TIMEOUT)?;
        Ok(Self {
            base_url,
            timeout,
        })
    }

    /// Returns the backend base address.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the backend base address as a string without a trailing slash.
    #[must_use]
    pub fn base_url_str(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Returns the request timeout for probe HTTP calls.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading the environment file.
    #[error("config io error: {0}")]
    Io(String),
    /// Environment file lacked a usable backend address line.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the env-file path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(ENV_FILE_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("env file path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_ENV_FILE))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("env file path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("env file path component too long".to_string()));
        }
    }
    Ok(())
}

/// Extracts the backend address value from the first matching line.
fn extract_backend_url(content: &str) -> Result<String, ConfigError> {
    for line in content.lines() {
        let line = line.trim();
        let Some(value) = line.strip_prefix(BACKEND_URL_KEY) else {
            continue;
        };
        let Some(value) = value.strip_prefix('=') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::Parse(format!("{BACKEND_URL_KEY} value is empty")));
        }
        return Ok(value.to_string());
    }
    Err(ConfigError::Parse(format!("no {BACKEND_URL_KEY} line found")))
}

/// Validates and normalizes the backend base address.
fn validate_base_url(raw_url: &str) -> Result<Url, ConfigError> {
    let trimmed = raw_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("backend url is empty".to_string()));
    }
    let parsed = Url::parse(trimmed)
        .map_err(|err| ConfigError::Invalid(format!("backend url is not valid: {err}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::Invalid(format!(
            "backend url scheme must be http or https, got {}",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::Invalid("backend url lacks a host".to_string()));
    }
    Ok(parsed)
}

/// Returns the effective timeout, honoring [`TIMEOUT_ENV_VAR`] when set.
/// The override acts as a minimum and never shortens a longer default.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the override is not a positive
/// integer number of seconds.
pub fn resolve_timeout(requested: Duration) -> Result<Duration, ConfigError> {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(raw) => {
            let override_timeout = parse_timeout_secs(&raw)
                .map_err(|detail| ConfigError::Invalid(format!("{TIMEOUT_ENV_VAR} {detail}")))?;
            Ok(std::cmp::max(requested, override_timeout))
        }
        Err(_) => Ok(requested),
    }
}

/// Parses a timeout override expressed in whole seconds.
fn parse_timeout_secs(raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("must be a positive integer number of seconds".to_string());
    }
    let secs: u64 =
        trimmed.parse().map_err(|_| "must be a positive integer number of seconds".to_string())?;
    if secs == 0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(Duration::from_secs(secs))
}
