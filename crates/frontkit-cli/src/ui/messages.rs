//! Status message functions for terminal output.

use frontkit_config::BuildConfiguration;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a success message to stderr.
pub fn success(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {message}");
    }
}

/// One-line description of a configuration:
/// `latest production -> <dir> (6 entries, 6 stages)`.
pub fn config_summary(config: &BuildConfiguration) -> String {
    let target = config.axes.target();
    let mode = config.axes.mode();
    let stats = if config.axes.is_stats_build { " stats" } else { "" };
    let counts = format!(
        "({} entries, {} stages)",
        config.entry_points().len(),
        config.pipeline().len()
    );

    if colors_enabled() {
        format!(
            "{} {}{} -> {} {}",
            target.bold(),
            mode,
            stats,
            config.output_dir().display().cyan(),
            counts.dimmed()
        )
    } else {
        format!(
            "{target} {mode}{stats} -> {} {counts}",
            config.output_dir().display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontkit_config::{Axes, Flavor, ProjectPaths, StaticVersion};
    use serial_test::serial;

    #[test]
    fn test_status_messages() {
        // These should not panic
        success("Success message");
        info("Info message");
        error("Error message");
    }

    #[test]
    #[serial]
    fn test_config_summary_plain() {
        let config = Flavor::Demo
            .build(
                Axes::new(true, false, true),
                &ProjectPaths::from_root("/repo"),
                &StaticVersion::new("1"),
            )
            .unwrap();
        if !colors_enabled() {
            assert_eq!(
                config_summary(&config),
                "es5 production stats -> /repo/demo/dist/frontend_es5 (2 entries, 6 stages)"
            );
        }
    }
}
