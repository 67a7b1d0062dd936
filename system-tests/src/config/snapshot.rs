// system-tests/src/config/snapshot.rs
// ============================================================================
// Module: Settings Snapshot
// Description: Frozen mapping of setting key to resolved value.
// Purpose: Give every test the same view of configuration for its lifetime.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`SettingsSnapshot`] is built once by the resolver and never mutated.
//! Each entry records the coerced value, the variable it came from, and
//! whether the value came from the environment or the declared default.

use std::collections::BTreeMap;

use serde::Serialize;

use super::error::ConfigError;
use super::schema::DefaultValue;
use super::schema::SettingKey;

/// Placeholder written in place of secret values.
const REDACTED: &str = "<redacted>";

// ============================================================================
// SECTION: Values
// ============================================================================

/// A coerced setting value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// String value.
    Text(String),
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
}

impl From<DefaultValue> for SettingValue {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Text(text) => Self::Text(text.to_string()),
            DefaultValue::Bool(flag) => Self::Bool(flag),
            DefaultValue::Integer(number) => Self::Integer(number),
            DefaultValue::Float(number) => Self::Float(number),
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingSource {
    /// Environment variable override.
    Environment,
    /// Declared schema default.
    Default,
}

impl SettingSource {
    /// Returns the stable label for logs and artifacts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Default => "default",
        }
    }
}

/// A single resolved setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSetting {
    /// Environment variable consulted for this setting.
    pub env_var: &'static str,
    /// Coerced value.
    pub value: SettingValue,
    /// Origin of the value.
    pub source: SettingSource,
    /// Value must not be written to artifacts or logs.
    #[serde(skip)]
    pub secret: bool,
}

// ============================================================================
// SECTION: Snapshot
// ============================================================================

/// Immutable, fully-resolved set of configuration values.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct SettingsSnapshot {
    /// Resolved entries keyed by setting key.
    entries: BTreeMap<&'static str, ResolvedSetting>,
}

impl SettingsSnapshot {
    /// Builds a snapshot from resolved entries.
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (SettingKey, ResolvedSetting)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().map(|(key, entry)| (key.as_str(), entry)).collect(),
        }
    }

    /// Returns the resolved entry for a key.
    #[must_use]
    pub fn get(&self, key: SettingKey) -> Option<&ResolvedSetting> {
        self.entries.get(key.as_str())
    }

    /// Returns the resolved value for a key.
    #[must_use]
    pub fn value(&self, key: SettingKey) -> Option<&SettingValue> {
        self.get(key).map(|entry| &entry.value)
    }

    /// Returns where the value for a key came from.
    #[must_use]
    pub fn source(&self, key: SettingKey) -> Option<SettingSource> {
        self.get(key).map(|entry| entry.source)
    }

    /// Returns the number of resolved settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no settings were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ResolvedSetting)> {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    /// Returns a copy with secret values replaced by a placeholder.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(key, entry)| {
                let mut entry = entry.clone();
                if entry.secret {
                    entry.value = SettingValue::Text(REDACTED.to_string());
                }
                (*key, entry)
            })
            .collect();
        Self {
            entries,
        }
    }

    /// Returns a string setting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the key is absent or not a string.
    pub fn text(&self, key: SettingKey) -> Result<&str, ConfigError> {
        match self.value(key) {
            Some(SettingValue::Text(text)) => Ok(text),
            _ => Err(mismatch(key, "string")),
        }
    }

    /// Returns a boolean setting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the key is absent or not a boolean.
    pub fn flag(&self, key: SettingKey) -> Result<bool, ConfigError> {
        match self.value(key) {
            Some(SettingValue::Bool(flag)) => Ok(*flag),
            _ => Err(mismatch(key, "boolean")),
        }
    }

    /// Returns an integer setting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the key is absent or not an integer.
    pub fn integer(&self, key: SettingKey) -> Result<i64, ConfigError> {
        match self.value(key) {
            Some(SettingValue::Integer(number)) => Ok(*number),
            _ => Err(mismatch(key, "integer")),
        }
    }

    /// Returns a floating point setting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] when the key is absent or not a number.
    pub fn float(&self, key: SettingKey) -> Result<f64, ConfigError> {
        match self.value(key) {
            Some(SettingValue::Float(number)) => Ok(*number),
            _ => Err(mismatch(key, "number")),
        }
    }
}

/// Builds a type mismatch error for a key.
const fn mismatch(key: SettingKey, expected: &'static str) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.as_str(),
        expected,
    }
}
