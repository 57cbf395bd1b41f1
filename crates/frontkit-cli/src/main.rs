//! frontkit CLI - emits bundler configurations for the frontend build.
//!
//! Parses arguments, loads settings, initializes logging and dispatches the
//! selected command.

use clap::Parser;
use frontkit_cli::{cli, commands, config, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    ui::init_colors(args.no_color);

    // Convert CLI errors to miette diagnostics for reporting
    run(args).map_err(error::cli_error_to_miette)
}

fn run(args: cli::Cli) -> error::Result<()> {
    let settings = config::Settings::load(args.command.selection())?;
    logger::init_logger_with_level(settings.log_level, args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args, &settings),
        cli::Command::Check(_) => commands::check_execute(&settings),
        cli::Command::Define(_) => commands::define_execute(&settings),
        cli::Command::Apply(apply_args) => commands::apply_execute(apply_args, &settings),
    }
}
