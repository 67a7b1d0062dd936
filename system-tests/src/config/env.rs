// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed resolution of the settings schema.
// Purpose: Centralize env parsing with strict UTF-8 and numeric validation.
// Dependencies: std, tracing
// ============================================================================

//! ## Overview
//! Environment values are read through an [`EnvSource`], so tests can resolve
//! against an in-memory map instead of mutating the process environment.
//! Invalid UTF-8 and non-numeric overrides for numeric settings fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::HashMap;

use tracing::debug;

use super::error::ConfigError;
use super::schema::Coercion;
use super::schema::SETTINGS;
use super::schema::SettingSpec;
use super::snapshot::ResolvedSetting;
use super::snapshot::SettingSource;
use super::snapshot::SettingValue;
use super::snapshot::SettingsSnapshot;

// ============================================================================
// SECTION: Sources
// ============================================================================

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonUnicode`] when the value is not valid UTF-8.
    fn var(&self, name: &str) -> Result<Option<String>, ConfigError>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Result<Option<String>, ConfigError> {
        read_env_strict(name)
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.get(name).cloned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.get(name).cloned())
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves every setting in [`SETTINGS`] against `env`.
///
/// Each setting takes its environment override when present, otherwise its
/// declared default. Overrides are coerced; defaults are already typed.
///
/// # Errors
///
/// Returns [`ConfigError`] when an override is not valid UTF-8 or cannot be
/// coerced to a numeric setting's type.
pub fn resolve_all(env: &impl EnvSource) -> Result<SettingsSnapshot, ConfigError> {
    let mut entries = Vec::with_capacity(SETTINGS.len());
    for spec in &SETTINGS {
        let (value, source) = match env.var(spec.env_var)? {
            Some(raw) => (coerce(spec, &raw)?, SettingSource::Environment),
            None => (SettingValue::from(spec.default), SettingSource::Default),
        };
        debug!(key = spec.key.as_str(), source = source.as_str(), "resolved setting");
        entries.push((
            spec.key,
            ResolvedSetting {
                env_var: spec.env_var,
                value,
                source,
                secret: spec.secret,
            },
        ));
    }
    Ok(SettingsSnapshot::from_entries(entries))
}

/// Applies a setting's coercion to a raw environment string.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] when an integer or float setting
/// receives a value that does not parse. Booleans never fail.
pub fn coerce(spec: &SettingSpec, raw: &str) -> Result<SettingValue, ConfigError> {
    match spec.coercion {
        Coercion::Text => Ok(SettingValue::Text(raw.to_string())),
        Coercion::Bool => Ok(SettingValue::Bool(raw == "true")),
        Coercion::Integer => raw
            .trim()
            .parse::<i64>()
            .map(SettingValue::Integer)
            .map_err(|_| invalid(spec, raw)),
        Coercion::Float => raw
            .trim()
            .parse::<f64>()
            .map(SettingValue::Float)
            .map_err(|_| invalid(spec, raw)),
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
pub fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| ConfigError::NonUnicode {
            env_var: name.to_string(),
        })
    })
}

/// Builds the coercion failure for a setting.
fn invalid(spec: &SettingSpec, raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        env_var: spec.env_var.to_string(),
        value: raw.to_string(),
        expected: spec.coercion.expected(),
    }
}
