//! Miette diagnostic conversion for CLI errors.

use frontkit_config::ConfigError;
use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a core error to a miette Report with a hint where one helps
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match &err {
        ConfigError::MissingVersion | ConfigError::VersionNotFound { .. } => miette::miette!(
            help = "Pass --app-version or set FRONTKIT_APP_VERSION",
            "{}",
            err
        ),
        ConfigError::PathNotFound { .. } => miette::miette!(
            help = "Pass --root <DIR> pointing at the repository",
            "{}",
            err
        ),
        ConfigError::EntryNotFound { .. } => miette::miette!(
            help = "Every entry point must exist before the bundler runs",
            "{}",
            err
        ),
        ConfigError::Unresolved { .. } => miette::miette!(
            help = "Check the relative path; extensions are probed in the order .js, .ts",
            "{}",
            err
        ),
        ConfigError::UnrecognizedExtension { .. } => miette::miette!(
            help = "Only .js, .ts, .json and .css modules can be imported",
            "{}",
            err
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_version_errors_carry_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::VersionNotFound {
            path: PathBuf::from("/repo/setup.py"),
        }));
        assert!(report.to_string().contains("/repo/setup.py"));
        let help = report.help().map(|h| h.to_string());
        assert_eq!(
            help.as_deref(),
            Some("Pass --app-version or set FRONTKIT_APP_VERSION")
        );
    }

    #[test]
    fn test_other_errors_keep_message() {
        let report = cli_error_to_miette(CliError::FileNotFound(PathBuf::from("/repo/a.ts")));
        assert_eq!(report.to_string(), "File not found: /repo/a.ts");
    }
}
