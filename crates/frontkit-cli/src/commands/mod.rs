//! Command implementations for the frontkit CLI.
//!
//! - [`config`] - Emit the configuration JSON
//! - [`check`] - Validate configurations against the filesystem
//! - [`define`] - Print the constant table
//! - [`apply`] - Run the plugin pipeline over one file
//!
//! Each command provides an `execute` function taking its parsed arguments
//! (where it has any beyond the shared selection) and the resolved settings.

pub mod apply;
pub mod check;
pub mod config;
pub mod define;
pub mod utils;

// Re-export execute functions for convenience
pub use apply::execute as apply_execute;
pub use check::execute as check_execute;
pub use config::execute as config_execute;
pub use define::execute as define_execute;
