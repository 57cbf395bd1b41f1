use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available frontkit subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the bundler configuration as JSON
    ///
    /// Emits one configuration object, or an array of two when
    /// `--target both` is selected.
    Config(ConfigArgs),

    /// Validate the configurations against the filesystem
    ///
    /// Checks that the project roots, every entry point and the output
    /// root's parent exist.
    Check(CheckArgs),

    /// Print the compile-time constant table
    Define(DefineArgs),

    /// Run the plugin pipeline over a single file
    ///
    /// Prints the module text after raw-text import and constant
    /// substitution, as the bundler would see it.
    Apply(ApplyArgs),
}

impl Command {
    /// Build selection shared by every subcommand.
    pub fn selection(&self) -> &SelectionArgs {
        match self {
            Command::Config(args) => &args.selection,
            Command::Check(args) => &args.selection,
            Command::Define(args) => &args.selection,
            Command::Apply(args) => &args.selection,
        }
    }
}

/// Flags selecting which configuration to build
///
/// Unset flags fall back to `frontkit.toml`, `FRONTKIT_*` variables and the
/// conventional `NODE_ENV` / `STATS` variables.
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Bundle flavor
    #[arg(long, value_enum)]
    pub flavor: Option<FlavorArg>,

    /// Module-format target
    #[arg(short = 't', long, value_enum)]
    pub target: Option<Target>,

    /// Production build
    #[arg(long)]
    pub prod: bool,

    /// Analysis build
    #[arg(long)]
    pub stats: bool,

    /// Repository root
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Version stamped into the bundle (skips reading setup.py)
    #[arg(long, value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Settings file (defaults to <root>/frontkit.toml when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Write the JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the define command
#[derive(Args, Debug)]
pub struct DefineArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Module to run through the pipeline
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub selection: SelectionArgs,
}
