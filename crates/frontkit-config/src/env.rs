//! Version lookup.
//!
//! The factory never reads the environment itself; it asks a
//! [`VersionProvider`] handed in by the caller.

use regex::Regex;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Supplies the release version stamped into every bundle.
pub trait VersionProvider {
    /// Current version. Absence is an error, never a default.
    fn version(&self) -> Result<String>;
}

impl<T: VersionProvider + ?Sized> VersionProvider for &T {
    fn version(&self) -> Result<String> {
        (**self).version()
    }
}

/// A fixed version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticVersion(String);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }
}

impl VersionProvider for StaticVersion {
    fn version(&self) -> Result<String> {
        let version = self.0.trim();
        if version.is_empty() {
            return Err(ConfigError::MissingVersion);
        }
        Ok(version.to_string())
    }
}

/// Reads the version from the Python package manifest (`setup.py`), taking the
/// first `YYYYMMDD.N` token.
#[derive(Debug, Clone)]
pub struct SetupPyVersion {
    manifest: PathBuf,
}

impl SetupPyVersion {
    pub const FILE_NAME: &'static str = "setup.py";

    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
        }
    }

    /// Manifest located directly under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }
}

impl VersionProvider for SetupPyVersion {
    fn version(&self) -> Result<String> {
        let content = std::fs::read_to_string(&self.manifest).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ConfigError::VersionNotFound {
                    path: self.manifest.clone(),
                }
            } else {
                ConfigError::Io(err)
            }
        })?;

        extract_version(&content).ok_or_else(|| ConfigError::VersionNotFound {
            path: self.manifest.clone(),
        })
    }
}

fn extract_version(content: &str) -> Option<String> {
    let pattern = Regex::new(r"\d{8}\.\d+").ok()?;
    pattern.find(content).map(|m| m.as_str().to_string())
}
