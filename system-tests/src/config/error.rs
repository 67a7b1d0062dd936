// system-tests/src/config/error.rs
// ============================================================================
// Module: Configuration Errors
// Description: Error type for settings resolution and validation.
// Purpose: Surface misconfiguration before any test talks to the API.
// Dependencies: thiserror
// ============================================================================

use thiserror::Error;

/// Configuration failures raised while resolving test settings.
///
/// Every variant is a startup-time error: a test run cannot proceed with a
/// setting it cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment value is not valid UTF-8.
    #[error("{env_var} must be valid UTF-8")]
    NonUnicode {
        /// Environment variable that held the value.
        env_var: String,
    },
    /// Environment value could not be coerced to the declared type.
    #[error("{env_var}=`{value}` is not a valid {expected}")]
    InvalidValue {
        /// Environment variable that held the value.
        env_var: String,
        /// Raw value as read from the environment.
        value: String,
        /// Human-readable description of the accepted form.
        expected: &'static str,
    },
    /// Setting is missing from the snapshot or has a different type.
    #[error("setting {key} is missing or not a {expected}")]
    TypeMismatch {
        /// Setting key that was requested.
        key: &'static str,
        /// Type the caller asked for.
        expected: &'static str,
    },
    /// Derived path segment would escape its base directory.
    #[error("path segment `{segment}` must be relative and must not contain `..`")]
    InvalidPathSegment {
        /// Offending segment.
        segment: String,
    },
    /// Logging could not be configured.
    #[error("invalid log configuration: {0}")]
    Logging(String),
}
