//! Pluggable configuration validation strategies
//!
//! Schema validation only inspects the produced value; filesystem validation
//! additionally checks that everything it references exists on disk.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::factory::BuildConfiguration;
use crate::flavor::Flavor;
use crate::paths::PathRegistry;
use crate::pipeline::STAGE_NAMES;

/// Trait for pluggable configuration validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()>;
}

/// Structural checks, no filesystem access.
///
/// # Example
///
/// ```
/// use frontkit_config::{Axes, ConfigValidator, ProjectPaths, SchemaValidator, StaticVersion, app_config};
///
/// let paths = ProjectPaths::from_root("/repo");
/// let config = app_config(Axes::default(), &paths, &StaticVersion::new("1.0")).unwrap();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        if config.entry_points().is_empty() {
            return Err(ConfigError::NoEntries);
        }

        let missing = config.define.missing_required();
        if !missing.is_empty() {
            return Err(ConfigError::IncompleteDefines { missing });
        }

        let names = config.pipeline().names();
        if names != STAGE_NAMES {
            return Err(ConfigError::InvalidValue(format!(
                "plugin pipeline is [{}], expected [{}]",
                names.join(", "),
                STAGE_NAMES.join(", ")
            )));
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Relative entry paths are taken from `root`.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        SchemaValidator.validate(config)?;

        for (name, entry) in config.entry_points().iter() {
            let path = self.root.join(entry);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound {
                    name: name.to_string(),
                    path,
                });
            }
        }

        // The output directory itself is created by the engine.
        if let Some(parent) = config.output_dir().parent() {
            let parent = self.root.join(parent);
            if !parent.is_dir() {
                return Err(ConfigError::PathNotFound {
                    name: "output",
                    path: parent,
                });
            }
        }

        Ok(())
    }
}

/// Check that the roots `flavor` reads from exist.
pub fn validate_roots(flavor: Flavor, paths: &dyn PathRegistry) -> Result<()> {
    let required: &[&str] = match flavor {
        Flavor::App => &["repository", "entrypoints"],
        Flavor::Demo => &["demo", "compatibility"],
    };

    for (name, path) in paths.named_roots() {
        if required.contains(&name) && !path.is_dir() {
            return Err(ConfigError::PathNotFound {
                name,
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfiguration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfiguration, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
