// system-tests/src/logging.rs
// ============================================================================
// Module: Test Logging
// Description: One-time tracing subscriber setup for system-test binaries.
// Purpose: Apply TEST_LOG_LEVEL and CAPTURE_LOGS to the whole test process.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! The first call to [`init`] installs a global subscriber; later calls are
//! no-ops. With `CAPTURE_LOGS=true` output goes through the libtest capture
//! writer and only shows for failing tests, otherwise it is written to stderr.

use std::sync::OnceLock;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::ConfigError;
use crate::config::TestSettings;

/// Set once the global subscriber has been installed.
static INSTALLED: OnceLock<()> = OnceLock::new();

/// Builds the level filter for a `TEST_LOG_LEVEL` value.
///
/// Bare level names are case-insensitive (`INFO` and `info` are equivalent).
/// Directives with a target (`MyCrate=debug`) are kept verbatim because
/// targets are case-sensitive.
///
/// # Errors
///
/// Returns [`ConfigError::Logging`] when the directive does not parse.
pub fn filter_for(level: &str) -> Result<EnvFilter, ConfigError> {
    let directives = level
        .split(',')
        .map(str::trim)
        .map(|directive| {
            if directive.contains('=') {
                directive.to_string()
            } else {
                directive.to_ascii_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::try_new(directives)
        .map_err(|err| ConfigError::Logging(format!("TEST_LOG_LEVEL `{level}`: {err}")))
}

/// Installs the global subscriber for this test process.
///
/// A subscriber installed by someone else is kept and the conflict is logged
/// at debug level.
///
/// # Errors
///
/// Returns [`ConfigError::Logging`] when `TEST_LOG_LEVEL` is not a valid filter.
pub fn init(settings: &TestSettings) -> Result<(), ConfigError> {
    let filter = filter_for(&settings.log_level)?;
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let installed = if settings.capture_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init()
    };
    if let Err(err) = installed {
        debug!(error = %err, "global subscriber already installed; keeping it");
    }
    let _ = INSTALLED.set(());
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
