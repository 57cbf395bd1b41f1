//! Logging infrastructure for the frontkit CLI.
//!
//! Log lines go to stderr so that command output on stdout (configuration
//! JSON, transformed modules) stays machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use frontkit_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Deriving configuration");
//! debug!("Flavor: {}", "app");
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown
const CRATES: [&str; 3] = ["frontkit", "frontkit_cli", "frontkit_config"];

/// Log level for frontkit output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging output
    #[serde(alias = "off")]
    Silent,
    /// Only errors
    Error,
    /// Errors and warnings
    #[serde(alias = "warning")]
    Warn,
    /// Errors, warnings, and info (default)
    #[default]
    Info,
    /// All logs including debug
    Debug,
}

impl LogLevel {
    /// Convert to tracing filter string
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter())
    }
}

/// Initialize the tracing subscriber at the default level.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for frontkit crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for frontkit crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_level(LogLevel::default(), verbose, quiet, no_color);
}

/// Initialize the tracing subscriber, falling back to `level` when no flag
/// or `RUST_LOG` applies.
pub fn init_logger_with_level(level: LogLevel, verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(level, verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Filter for the given level and flags.
pub fn build_filter(level: LogLevel, verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(directives(LogLevel::Debug))
    } else if quiet {
        EnvFilter::new(directives(LogLevel::Error))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)))
    }
}

fn directives(level: LogLevel) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={}", level.as_filter()))
        .collect::<Vec<_>>()
        .join(",")
}
