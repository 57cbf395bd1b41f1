//! Command-line interface definition for frontkit.
//!
//! # Command Structure
//!
//! - `frontkit config` - Print or write the bundler configuration as JSON
//! - `frontkit check` - Build the configurations and validate them on disk
//! - `frontkit define` - Print the compile-time constant table
//! - `frontkit apply` - Run the plugin pipeline over one file

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{ApplyArgs, CheckArgs, Command, ConfigArgs, DefineArgs, SelectionArgs};
pub use enums::*;

/// frontkit - bundler configurations for the frontend build
#[derive(Parser, Debug)]
#[command(
    name = "frontkit",
    version,
    about = "Generate bundler configurations for the frontend build",
    long_about = "frontkit derives the bundler configuration for one build from three flags\n\
                  (production, modern target, stats) and a flavor (app or demo harness):\n\
                  entry points, plugin pipeline, compile-time constants and output routing."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
