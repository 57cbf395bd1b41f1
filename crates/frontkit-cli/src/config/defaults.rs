use std::path::PathBuf;

use frontkit_config::Flavor;

use crate::cli::Target;
use crate::config::Settings;
use crate::logger::LogLevel;

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_flavor() -> Flavor {
    Flavor::App
}

pub fn default_target() -> Target {
    Target::Latest
}

pub fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Settings {
    /// Default settings: app flavor, latest target, development build.
    pub fn default_config() -> Self {
        Self {
            root: default_root(),
            flavor: default_flavor(),
            target: default_target(),
            prod: false,
            stats: false,
            app_version: None,
            log_level: default_log_level(),
        }
    }
}
