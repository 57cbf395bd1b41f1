//! Error types for configuration derivation, validation and pipeline stages.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Collaborator data
    #[error("version string is empty")]
    MissingVersion,

    #[error("no version found in {}", .path.display())]
    VersionNotFound { path: PathBuf },

    #[error("{name} root not found: {}", .path.display())]
    PathNotFound { name: &'static str, path: PathBuf },

    // Pipeline failures
    #[error("could not resolve '{specifier}' imported from {}", .importer.display())]
    Unresolved { specifier: String, importer: PathBuf },

    #[error("unrecognized import extension: {}", .path.display())]
    UnrecognizedExtension { path: PathBuf },

    // Schema and filesystem validation
    #[error("entry point '{name}' not found: {}", .path.display())]
    EntryNotFound { name: String, path: PathBuf },

    #[error("duplicate entry point name: {0}")]
    DuplicateEntry(String),

    #[error("no entry points declared")]
    NoEntries,

    #[error("define table is missing: {}", .missing.join(", "))]
    IncompleteDefines { missing: Vec<String> },

    #[error("unknown flavor: {0} (expected 'app' or 'demo')")]
    UnknownFlavor(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
