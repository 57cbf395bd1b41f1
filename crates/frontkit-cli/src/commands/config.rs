//! Config command implementation.
//!
//! Emits the bundler configuration as JSON: one object for a single target,
//! an array of two for `--target both`.

use frontkit_config::BuildConfiguration;
use std::fs;

use crate::cli::ConfigArgs;
use crate::commands::utils;
use crate::config::Settings;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the config command.
pub fn execute(args: ConfigArgs, settings: &Settings) -> Result<()> {
    let configs = utils::build_all(settings)?;
    let json = render(&configs, args.pretty)?;

    match args.out {
        Some(out) => {
            let out = utils::resolve_path(&out, &utils::get_cwd()?);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(&out, format!("{json}\n"))
                .context(format!("Failed to write {}", out.display()))?;
            ui::success(&format!(
                "Wrote {} configuration{} to {}",
                configs.len(),
                if configs.len() == 1 { "" } else { "s" },
                out.display()
            ));
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Serialize `configs`, unwrapping a single configuration.
pub fn render(configs: &[BuildConfiguration], pretty: bool) -> Result<String> {
    let json = match (configs, pretty) {
        ([single], true) => serde_json::to_string_pretty(single)?,
        ([single], false) => serde_json::to_string(single)?,
        (many, true) => serde_json::to_string_pretty(many)?,
        (many, false) => serde_json::to_string(many)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Target;
    use std::path::PathBuf;

    fn settings(target: Target) -> Settings {
        Settings {
            root: PathBuf::from("/repo"),
            target,
            prod: true,
            app_version: Some("20200407.2".to_string()),
            ..Settings::default_config()
        }
    }

    #[test]
    fn test_single_target_is_an_object() {
        let configs = utils::build_all(&settings(Target::Latest)).unwrap();
        let json = render(&configs, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_object());
        assert_eq!(value["outputOptions"]["dir"], "/repo/frontend_latest");
        assert_eq!(value["define"]["__DEV__"], "false");
    }

    #[test]
    fn test_both_targets_are_an_array() {
        let configs = utils::build_all(&settings(Target::Both)).unwrap();
        let json = render(&configs, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["outputOptions"]["format"], "es");
        assert_eq!(array[1]["outputOptions"]["format"], "iife");
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_define_order_is_preserved() {
        let configs = utils::build_all(&settings(Target::Es5)).unwrap();
        let json = render(&configs, false).unwrap();
        let dev = json.find("\"__DEV__\"").unwrap();
        let node_env = json.find("\"process.env.NODE_ENV\"").unwrap();
        assert!(dev < node_env);
    }
}
