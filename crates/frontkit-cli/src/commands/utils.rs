//! Shared utilities for command implementations.

use frontkit_config::BuildConfiguration;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::Result;

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Build one configuration per selected target, latest first.
pub fn build_all(settings: &Settings) -> Result<Vec<BuildConfiguration>> {
    let paths = settings.paths();
    let version = settings.version_provider();

    settings
        .axes()
        .into_iter()
        .map(|axes| {
            tracing::debug!(flavor = %settings.flavor, target = %axes.target(), "building configuration");
            Ok(settings.flavor.build(axes, &paths, version.as_ref())?)
        })
        .collect()
}
