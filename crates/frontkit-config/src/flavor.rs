//! Flavor builders: the application bundle and the demo harness.
//!
//! Each builder only fixes an entry-point map, an output root and (for the
//! demo) a define overlay, then forwards to [`factory::create`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::axes::Axes;
use crate::define::{self, DefineTable, DefineValue};
use crate::entry::EntryPoints;
use crate::env::VersionProvider;
use crate::error::{ConfigError, Result};
use crate::factory::{self, BuildConfiguration, ConfigRequest};
use crate::paths::PathRegistry;

/// Application entry names. Each is `<entrypoints>/<name>.ts`.
pub const APP_ENTRIES: [&str; 6] = [
    "app",
    "authorize",
    "onboarding",
    "core",
    "compatibility",
    "custom-panel",
];

/// Prefix stamped onto the demo version
pub const DEMO_VERSION_PREFIX: &str = "DEMO-";

/// Configuration for the main application.
pub fn app_config(
    axes: Axes,
    paths: &dyn PathRegistry,
    version: &dyn VersionProvider,
) -> Result<BuildConfiguration> {
    let entries_dir = paths.entrypoints_dir();
    let entry_points = EntryPoints::from_pairs(
        APP_ENTRIES
            .iter()
            .map(|name| (*name, entries_dir.join(format!("{name}.ts")))),
    )?;

    factory::create(ConfigRequest::new(entry_points, paths.root(), axes), version)
}

/// Configuration for the demo harness.
///
/// The version is read here as well as in the factory; the overlay needs it
/// to build the `DEMO-` string.
pub fn demo_config(
    axes: Axes,
    paths: &dyn PathRegistry,
    version: &dyn VersionProvider,
) -> Result<BuildConfiguration> {
    let entry_points = EntryPoints::from_pairs([
        ("main", paths.demo_dir().join("src").join("entrypoint.ts")),
        (
            "compatibility",
            paths
                .compat_root()
                .join("src")
                .join("entrypoints")
                .join("compatibility.ts"),
        ),
    ])?;

    let overlay = demo_overlay(&version.version()?);
    let request = ConfigRequest::new(entry_points, paths.demo_root(), axes).with_overlay(overlay);
    factory::create(request, version)
}

fn demo_overlay(version: &str) -> DefineTable {
    DefineTable::new()
        .with(
            define::VERSION,
            DefineValue::json(format!("{DEMO_VERSION_PREFIX}{version}")),
        )
        .with(define::DEMO, DefineValue::Bool(true))
}

/// Which bundle to configure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[default]
    App,
    Demo,
}

impl Flavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Demo => "demo",
        }
    }

    pub fn build(
        &self,
        axes: Axes,
        paths: &dyn PathRegistry,
        version: &dyn VersionProvider,
    ) -> Result<BuildConfiguration> {
        match self {
            Self::App => app_config(axes, paths, version),
            Self::Demo => demo_config(axes, paths, version),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "app" => Ok(Self::App),
            "demo" => Ok(Self::Demo),
            other => Err(ConfigError::UnknownFlavor(other.to_string())),
        }
    }
}
