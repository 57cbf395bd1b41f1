use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use frontkit_config::Flavor;
use path_clean::PathClean;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::{SelectionArgs, Target};
use crate::commands::utils::resolve_path;
use crate::config::Settings;
use crate::error::{Result, SettingsError};

/// Settings file looked up in the repository root
pub const SETTINGS_FILE: &str = "frontkit.toml";

const ENV_PREFIX: &str = "FRONTKIT_";
const ENV_APP_VERSION: &str = "FRONTKIT_APP_VERSION";
const ENV_ROOT: &str = "FRONTKIT_ROOT";

/// A partial settings layer. Only fields that are set are merged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prod: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
}

impl SettingsOverrides {
    /// Layer for explicitly given CLI flags. Boolean flags only ever switch a
    /// setting on.
    pub fn from_args(args: &SelectionArgs, cwd: &Path) -> Self {
        Self {
            root: args.root.as_deref().map(|root| resolve_path(root, cwd)),
            flavor: args.flavor.map(Into::into),
            target: args.target,
            prod: args.prod.then_some(true),
            stats: args.stats.then_some(true),
            app_version: args.app_version.clone(),
        }
    }
}

/// Layer for the conventional build variables: `NODE_ENV=production` selects
/// a production build and `STATS=1` an analysis build.
pub fn conventional_overrides(node_env: Option<&str>, stats: Option<&str>) -> SettingsOverrides {
    SettingsOverrides {
        prod: (node_env == Some("production")).then_some(true),
        stats: (stats == Some("1")).then_some(true),
        ..SettingsOverrides::default()
    }
}

impl Settings {
    /// Load settings relative to the current directory.
    pub fn load(args: &SelectionArgs) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(args, &cwd)
    }

    /// Load settings from every source.
    /// Priority: CLI args > NODE_ENV/STATS > FRONTKIT_* > settings file > defaults
    ///
    /// The settings file is `--config`, or `frontkit.toml` under the root
    /// named by `--root`, then `FRONTKIT_ROOT`, then the working directory.
    pub fn load_from(args: &SelectionArgs, cwd: &Path) -> Result<Self> {
        let cli = SettingsOverrides::from_args(args, cwd);
        let env_root = env_var(ENV_ROOT).map(|root| resolve_path(Path::new(&root), cwd));
        let lookup_root = cli
            .root
            .clone()
            .or_else(|| env_root.clone())
            .unwrap_or_else(|| cwd.to_path_buf());

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        if let Some(path) = settings_file(args, &lookup_root, cwd)? {
            tracing::debug!(path = %path.display(), "loading settings file");
            figment = figment.merge(Toml::file(path));
        }

        // Paths and versions can look like numbers; keep the raw strings.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["app_version", "root"]));
        if let Some(root) = env_root {
            figment = figment.merge(Serialized::default("root", root));
        }
        if let Some(version) = env_var(ENV_APP_VERSION) {
            figment = figment.merge(Serialized::default("app_version", version));
        }

        let conventional =
            conventional_overrides(env_var("NODE_ENV").as_deref(), env_var("STATS").as_deref());
        figment = figment
            .merge(Serialized::defaults(conventional))
            .merge(Serialized::defaults(cli));

        let mut settings: Self = figment.extract().map_err(|e| SettingsError::InvalidValue {
            field: "settings".to_string(),
            value: e.to_string(),
            hint: format!("Check {SETTINGS_FILE} and FRONTKIT_* variables"),
        })?;

        // A relative root from a settings file is relative to that file.
        let base = figment
            .find_metadata("root")
            .and_then(|metadata| metadata.source.as_ref())
            .and_then(|source| source.file_path())
            .and_then(Path::parent)
            .unwrap_or(cwd);
        settings.root = resolve_path(&settings.root, base).clean();
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

/// The explicit `--config` file, or `frontkit.toml` under the root when present.
fn settings_file(args: &SelectionArgs, root: &Path, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = &args.config {
        let path = resolve_path(path, cwd);
        if !path.is_file() {
            return Err(SettingsError::NotFound(path).into());
        }
        return Ok(Some(path));
    }

    let default_path = root.join(SETTINGS_FILE);
    Ok(default_path.is_file().then_some(default_path))
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
