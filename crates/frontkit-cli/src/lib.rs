//! frontkit CLI - emits bundler configurations for the frontend build.
//!
//! This crate wires the pure derivation logic in `frontkit-config` to the
//! outside world: the process environment, settings files, the filesystem and
//! the terminal.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`config`] - Layered settings (defaults, `frontkit.toml`, environment, flags)
//! - [`commands`] - `config`, `check`, `define` and `apply`
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use frontkit_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt, SettingsError};
