//! Check command implementation.
//!
//! Builds the selected configurations and validates them against the
//! filesystem without emitting anything.

use frontkit_config::{ConfigValidator, FsValidator, validate_roots};

use crate::commands::utils;
use crate::config::Settings;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. The flavor's project roots exist
/// 2. Each configuration passes schema validation
/// 3. Each entry point and the output root's parent exist
pub fn execute(settings: &Settings) -> Result<()> {
    ui::info(&format!(
        "Checking {} configuration in {}",
        settings.flavor,
        settings.root.display()
    ));

    validate_roots(settings.flavor, &settings.paths())?;

    let validator = FsValidator::new(&settings.root);
    for config in utils::build_all(settings)? {
        let summary = ui::config_summary(&config);
        if let Err(err) = validator.validate(&config) {
            ui::error(&summary);
            return Err(err.into());
        }
        ui::success(&summary);
    }

    ui::success("All checks passed!");
    Ok(())
}
