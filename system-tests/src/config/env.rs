// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for the contract suite.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: reservation-client, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use reservation_client::DEFAULT_BASE_URL;
use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Base URL value that selects the public deployment.
pub const DEFAULT_TARGET_KEYWORD: &str = "default";
/// Base URL value that selects the in-process stub.
pub const STUB_TARGET_KEYWORD: &str = "stub";

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Service target; unset selects the public deployment.
    BaseUrl,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional artifact root override.
    RunRoot,
    /// Allow reusing an existing artifact root (`true`/`false` or `1`/`0`).
    AllowOverwrite,
}

impl SystemTestEnv {
    /// Every configuration key.
    pub const ALL: [Self; 4] =
        [Self::BaseUrl, Self::TimeoutSeconds, Self::RunRoot, Self::AllowOverwrite];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "RESERVATION_SYSTEM_TEST_BASE_URL",
            Self::TimeoutSeconds => "RESERVATION_SYSTEM_TEST_TIMEOUT_SEC",
            Self::RunRoot => "RESERVATION_SYSTEM_TEST_RUN_ROOT",
            Self::AllowOverwrite => "RESERVATION_SYSTEM_TEST_ALLOW_OVERWRITE",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Service the contract cases run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceTarget {
    /// Remote service at a normalized base URL.
    Remote(String),
    /// Fresh in-process stub per case.
    Stub,
}

impl Default for ServiceTarget {
    fn default() -> Self {
        Self::Remote(DEFAULT_BASE_URL.to_string())
    }
}

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Service target for contract cases.
    pub target: ServiceTarget,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional artifact root override.
    pub run_root: Option<PathBuf>,
    /// Allow reusing an existing artifact root.
    pub allow_overwrite: bool,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or boolean value).
    pub fn load() -> Result<Self, String> {
        let target = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?
            .map(|value| resolve_target(SystemTestEnv::BaseUrl.as_str(), &value))
            .transpose()?
            .unwrap_or_default();
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let allow_overwrite = parse_bool_env(
            SystemTestEnv::AllowOverwrite.as_str(),
            read_env_nonempty(SystemTestEnv::AllowOverwrite.as_str())?,
        )?;
        Ok(Self {
            target,
            timeout,
            run_root,
            allow_overwrite,
        })
    }

    /// Returns true when the suite targets a remote service.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.target, ServiceTarget::Remote(_))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Resolves the service target, expanding the `default` and `stub` keywords.
///
/// # Errors
///
/// Returns an error when the value is not a keyword or an `http`/`https` URL
/// with a host.
fn resolve_target(name: &str, raw: &str) -> Result<ServiceTarget, String> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case(DEFAULT_TARGET_KEYWORD) {
        return Ok(ServiceTarget::default());
    }
    if trimmed.eq_ignore_ascii_case(STUB_TARGET_KEYWORD) {
        return Ok(ServiceTarget::Stub);
    }
    let invalid = || {
        format!(
            "{name} must be an http(s) URL, `{DEFAULT_TARGET_KEYWORD}`, or `{STUB_TARGET_KEYWORD}`"
        )
    };
    let url = Url::parse(trimmed).map_err(|err| format!("{}: {err}", invalid()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(ServiceTarget::Remote(trimmed.trim_end_matches('/').to_string()))
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean environment variable with permissive defaults.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
