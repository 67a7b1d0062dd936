// system-tests/src/config/settings.rs
// ============================================================================
// Module: Typed Test Settings
// Description: Strongly-typed view over a resolved settings snapshot.
// Purpose: Validate ranges and URLs once so tests read plain typed fields.
// Dependencies: url
// ============================================================================

//! ## Overview
//! [`TestSettings`] is built once per test from a [`SettingsSnapshot`] and
//! passed into helpers by reference. It is never mutated; a test that needs a
//! different configuration resolves a new one from a different environment.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use url::Url;

use super::env::EnvSource;
use super::env::ProcessEnv;
use super::env::resolve_all;
use super::error::ConfigError;
use super::paths::ProjectPaths;
use super::schema::API_VERSION;
use super::schema::SettingKey;
use super::snapshot::SettingsSnapshot;

// ============================================================================
// SECTION: Settings Groups
// ============================================================================

/// Browser-session settings. Resolved and reported; no browser is driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserSettings {
    /// Run sessions without a visible window.
    pub headless: bool,
    /// Pause applied before each API request.
    pub slow_mo: Duration,
    /// Browser-level timeout.
    pub timeout: Duration,
}

/// HTTP client behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries after a transient send failure.
    pub max_retries: u32,
    /// Delay between retries.
    pub retry_delay: Duration,
}

/// Optional suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Latency gates.
    pub performance_tests: bool,
    /// Concurrent load.
    pub stress_tests: bool,
    /// Response shape checks.
    pub contract_tests: bool,
}

/// Handling of data created by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRetention {
    /// Delete uploaded files after a passing test.
    pub cleanup_after_tests: bool,
    /// Keep uploaded files and artifacts after a failing test.
    pub preserve_failed_test_data: bool,
}

impl DataRetention {
    /// Returns whether uploads should be deleted for a test outcome.
    #[must_use]
    pub const fn should_cleanup(self, passed: bool) -> bool {
        if !self.cleanup_after_tests {
            return false;
        }
        passed || !self.preserve_failed_test_data
    }
}

// ============================================================================
// SECTION: Test Settings
// ============================================================================

/// Typed system-test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSettings {
    /// Deployment label (`local`, `staging`, ...).
    pub environment: String,
    /// Base URL of the API under test.
    pub base_url: Url,
    /// Base URL of the frontend.
    pub frontend_url: Url,
    /// Database URL used by the service under test.
    pub database_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Log filter directive.
    pub log_level: String,
    /// Route logs through the test harness capture.
    pub capture_logs: bool,
    /// Browser-session settings.
    pub browser: BrowserSettings,
    /// HTTP client behaviour.
    pub http: HttpSettings,
    /// Optional suites.
    pub features: FeatureFlags,
    /// Handling of data created by tests.
    pub retention: DataRetention,
    /// Latency budget for performance tests.
    pub perf_max_response: Duration,
    /// Concurrent uploads issued by stress tests.
    pub stress_concurrency: usize,
    /// Derived file-system locations.
    pub paths: ProjectPaths,
    /// Snapshot the typed fields were built from.
    snapshot: SettingsSnapshot,
}

impl TestSettings {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any environment override is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(&ProcessEnv)
    }

    /// Loads settings from an explicit environment source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any environment override is invalid.
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ConfigError> {
        Self::from_snapshot(resolve_all(env)?, ProjectPaths::discover()?)
    }

    /// Validates a resolved snapshot into typed settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a URL does not parse, a duration is
    /// negative, or a count is out of range.
    pub fn from_snapshot(
        snapshot: SettingsSnapshot,
        paths: ProjectPaths,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            environment: snapshot.text(SettingKey::Env)?.to_string(),
            base_url: url_setting(&snapshot, SettingKey::BaseUrl)?,
            frontend_url: url_setting(&snapshot, SettingKey::FrontendUrl)?,
            database_url: snapshot.text(SettingKey::DatabaseUrl)?.to_string(),
            api_key: snapshot.text(SettingKey::ApiKey)?.to_string(),
            log_level: snapshot.text(SettingKey::LogLevel)?.to_string(),
            capture_logs: snapshot.flag(SettingKey::CaptureLogs)?,
            browser: BrowserSettings {
                headless: snapshot.flag(SettingKey::Headless)?,
                slow_mo: Duration::from_millis(non_negative(&snapshot, SettingKey::SlowMo)?),
                timeout: Duration::from_millis(positive(&snapshot, SettingKey::E2eTimeout)?),
            },
            http: HttpSettings {
                timeout: Duration::from_secs(positive(&snapshot, SettingKey::TestTimeout)?),
                max_retries: bounded(&snapshot, SettingKey::MaxRetries)?,
                retry_delay: seconds(&snapshot, SettingKey::RetryDelay)?,
            },
            features: FeatureFlags {
                performance_tests: snapshot.flag(SettingKey::EnablePerformanceTests)?,
                stress_tests: snapshot.flag(SettingKey::EnableStressTests)?,
                contract_tests: snapshot.flag(SettingKey::EnableContractTests)?,
            },
            retention: DataRetention {
                cleanup_after_tests: snapshot.flag(SettingKey::CleanupAfterTests)?,
                preserve_failed_test_data: snapshot.flag(SettingKey::PreserveFailedTestData)?,
            },
            perf_max_response: Duration::from_millis(positive(
                &snapshot,
                SettingKey::PerfMaxResponseMs,
            )?),
            stress_concurrency: bounded(&snapshot, SettingKey::StressConcurrency)?,
            paths,
            snapshot,
        })
    }

    /// Returns the snapshot these settings were built from.
    #[must_use]
    pub const fn snapshot(&self) -> &SettingsSnapshot {
        &self.snapshot
    }

    /// Returns the API version the tests target.
    #[must_use]
    pub const fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Builds an absolute API URL for `path` under `base`.
    ///
    /// Any path prefix on `base` is kept (`http://host/prefix` + `/api/health`
    /// gives `http://host/prefix/api/health`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the joined URL does not parse.
    pub fn api_url(base: &Url, path: &str) -> Result<Url, ConfigError> {
        let joined =
            format!("{}/{}", base.as_str().trim_end_matches('/'), path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|_| ConfigError::InvalidValue {
            env_var: SettingKey::BaseUrl.as_str().to_string(),
            value: joined,
            expected: "absolute URL",
        })
    }
}

// ============================================================================
// SECTION: Validators
// ============================================================================

/// Parses a string setting as an absolute URL.
fn url_setting(snapshot: &SettingsSnapshot, key: SettingKey) -> Result<Url, ConfigError> {
    let raw = snapshot.text(key)?;
    Url::parse(raw).map_err(|_| out_of_range(snapshot, key, raw.to_string(), "absolute URL"))
}

/// Reads an integer setting that must be zero or greater.
fn non_negative(snapshot: &SettingsSnapshot, key: SettingKey) -> Result<u64, ConfigError> {
    let value = snapshot.integer(key)?;
    u64::try_from(value)
        .map_err(|_| out_of_range(snapshot, key, value.to_string(), "non-negative integer"))
}

/// Reads an integer setting that must be greater than zero.
fn positive(snapshot: &SettingsSnapshot, key: SettingKey) -> Result<u64, ConfigError> {
    let value = snapshot.integer(key)?;
    match u64::try_from(value) {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(out_of_range(snapshot, key, value.to_string(), "positive integer")),
    }
}

/// Reads a non-negative integer setting that must fit the target type.
fn bounded<T: TryFrom<i64>>(
    snapshot: &SettingsSnapshot,
    key: SettingKey,
) -> Result<T, ConfigError> {
    let value = snapshot.integer(key)?;
    if value < 0 {
        return Err(out_of_range(snapshot, key, value.to_string(), "non-negative integer"));
    }
    T::try_from(value)
        .map_err(|_| out_of_range(snapshot, key, value.to_string(), "integer in range"))
}

/// Reads a float setting as a non-negative number of seconds.
fn seconds(snapshot: &SettingsSnapshot, key: SettingKey) -> Result<Duration, ConfigError> {
    let value = snapshot.float(key)?;
    Duration::try_from_secs_f64(value)
        .map_err(|_| {
            out_of_range(snapshot, key, value.to_string(), "non-negative number of seconds")
        })
}

/// Builds a validation error attributed to the setting's variable.
fn out_of_range(
    snapshot: &SettingsSnapshot,
    key: SettingKey,
    value: String,
    expected: &'static str,
) -> ConfigError {
    let env_var = snapshot.get(key).map_or_else(|| key.as_str(), |entry| entry.env_var);
    ConfigError::InvalidValue {
        env_var: env_var.to_string(),
        value,
        expected,
    }
}
