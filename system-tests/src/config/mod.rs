// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized configuration for PDF store system tests.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: serde, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! System-test configuration is read from environment variables and mapped into
//! a typed structure for reuse across test helpers.
//!
//! Resolution happens in two layers:
//! - [`resolve_all`] walks the [`SETTINGS`] schema and produces a
//!   [`SettingsSnapshot`] (key to coerced value, plus where it came from).
//! - [`TestSettings`] validates the snapshot into durations, URLs, and flags.
//!
//! Invalid numeric overrides fail closed with [`ConfigError`]; boolean settings
//! only recognise the exact string `true` and treat anything else as false.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;
mod error;
mod paths;
mod schema;
mod settings;
mod snapshot;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::EnvSource;
pub use env::ProcessEnv;
pub use env::coerce;
pub use env::read_env_strict;
pub use env::resolve_all;
pub use error::ConfigError;
pub use paths::ProjectPaths;
pub use paths::derive_path;
pub use schema::API_VERSION;
pub use schema::Coercion;
pub use schema::DefaultValue;
pub use schema::SETTINGS;
pub use schema::SettingKey;
pub use schema::SettingSpec;
pub use settings::BrowserSettings;
pub use settings::DataRetention;
pub use settings::FeatureFlags;
pub use settings::HttpSettings;
pub use settings::TestSettings;
pub use snapshot::ResolvedSetting;
pub use snapshot::SettingSource;
pub use snapshot::SettingValue;
pub use snapshot::SettingsSnapshot;
