// system-tests/src/lib.rs
// ============================================================================
// Module: PDF Store System Tests Library
// Description: Shared configuration and logging for PDF store system tests.
// Purpose: Provide a single resolved settings snapshot to every test binary.
// Dependencies: thiserror, tracing, tracing-subscriber, url
// ============================================================================

//! ## Overview
//! This crate hosts the configuration resolver and logging setup used by the
//! PDF store system-test binaries in `system-tests/tests`.
//!
//! Settings are resolved from the process environment against a static
//! schema, coerced into typed values, and handed to each test as an
//! immutable [`config::TestSettings`]. Nothing here performs network I/O.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod logging;
