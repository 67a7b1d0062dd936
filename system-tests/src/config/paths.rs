// system-tests/src/config/paths.rs
// ============================================================================
// Module: Project Paths
// Description: File-system locations derived from the crate root.
// Purpose: Locate fixtures and test directories independent of the cwd.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Paths are anchored at this crate's manifest directory, fixed at compile
//! time, so tests resolve the same fixtures whichever directory they run from.
//! Derivation is a pure join: nothing is created or checked on disk.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use super::error::ConfigError;

/// Project root baked in at compile time.
const PROJECT_ROOT: &str = env!("CARGO_MANIFEST_DIR");

/// Joins relative `segments` onto `base`.
///
/// Segments may contain separators (`"tests/fixtures"`). `.` components are
/// dropped. The result is always syntactically under `base`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPathSegment`] for absolute segments or
/// segments containing `..`.
pub fn derive_path(base: &Path, segments: &[&str]) -> Result<PathBuf, ConfigError> {
    let mut path = base.to_path_buf();
    for segment in segments {
        for component in Path::new(segment).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(ConfigError::InvalidPathSegment {
                        segment: (*segment).to_string(),
                    });
                }
            }
        }
    }
    Ok(path)
}

/// Read-only directories used by the test suites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Root of the system-test crate.
    pub project_root: PathBuf,
    /// Static test fixtures (`<root>/tests/fixtures`).
    pub fixtures_dir: PathBuf,
    /// Integration suites (`<root>/tests/integration`).
    pub integration_dir: PathBuf,
    /// Per-run artifact output (`<root>/target/system-tests`).
    pub artifacts_dir: PathBuf,
}

impl ProjectPaths {
    /// Derives paths from the compiled-in project root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if a built-in segment is malformed.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::from_root(PathBuf::from(PROJECT_ROOT))
    }

    /// Derives paths from an explicit root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if a built-in segment is malformed.
    pub fn from_root(project_root: PathBuf) -> Result<Self, ConfigError> {
        Ok(Self {
            fixtures_dir: derive_path(&project_root, &["tests", "fixtures"])?,
            integration_dir: derive_path(&project_root, &["tests", "integration"])?,
            artifacts_dir: derive_path(&project_root, &["target", "system-tests"])?,
            project_root,
        })
    }

    /// Returns the path of a named fixture.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPathSegment`] when `name` would escape the
    /// fixtures directory.
    pub fn fixture(&self, name: &str) -> Result<PathBuf, ConfigError> {
        derive_path(&self.fixtures_dir, &[name])
    }
}
