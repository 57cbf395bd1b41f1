//! Layered settings for frontkit.
//!
//! Merges settings from defaults, `frontkit.toml`, environment variables and
//! CLI flags. Priority: CLI > NODE_ENV/STATS > FRONTKIT_* > File > Defaults

mod defaults;
mod loading;
mod tests;

use frontkit_config::{
    Axes, Flavor, PathRegistry, ProjectPaths, SetupPyVersion, StaticVersion, VersionProvider,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Target;
use crate::logger::LogLevel;

pub use defaults::*;
pub use loading::{SETTINGS_FILE, SettingsOverrides, conventional_overrides};

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Repository root (absolute after loading)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Bundle flavor
    #[serde(default)]
    pub flavor: Flavor,

    /// Module-format target
    #[serde(default)]
    pub target: Target,

    /// Production build
    #[serde(default)]
    pub prod: bool,

    /// Analysis build
    #[serde(default)]
    pub stats: bool,

    /// Fixed version; when unset it is read from `setup.py`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,

    /// Log level used when neither `--verbose`, `--quiet` nor `RUST_LOG` is given
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Settings {
    /// Axis sets for every selected target.
    pub fn axes(&self) -> Vec<Axes> {
        self.target.axes(self.prod, self.stats)
    }

    /// Project roots under [`Settings::root`].
    pub fn paths(&self) -> ProjectPaths {
        ProjectPaths::from_root(&self.root)
    }

    /// Version source: the fixed version when set, otherwise the package
    /// manifest under the compatibility root.
    pub fn version_provider(&self) -> Box<dyn VersionProvider> {
        match &self.app_version {
            Some(version) => Box::new(StaticVersion::new(version.clone())),
            None => Box::new(SetupPyVersion::in_dir(self.paths().compat_root())),
        }
    }
}
