#[cfg(test)]
mod tests {
    use crate::cli::{FlavorArg, SelectionArgs, Target};
    use crate::config::*;
    use crate::error::{CliError, SettingsError};
    use crate::logger::LogLevel;
    use frontkit_config::{Axes, Flavor, VersionProvider};
    use serial_test::serial;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const ENV_VARS: [&str; 9] = [
        "NODE_ENV",
        "STATS",
        "FRONTKIT_ROOT",
        "FRONTKIT_TARGET",
        "FRONTKIT_FLAVOR",
        "FRONTKIT_PROD",
        "FRONTKIT_STATS",
        "FRONTKIT_APP_VERSION",
        "FRONTKIT_LOG_LEVEL",
    ];

    fn clear_env() {
        for name in ENV_VARS {
            unsafe { std::env::remove_var(name) };
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&SelectionArgs::default(), dir.path()).unwrap();

        assert_eq!(
            settings,
            Settings {
                root: dir.path().to_path_buf(),
                ..Settings::default_config()
            }
        );
        assert_eq!(settings.axes(), vec![Axes::new(false, true, false)]);
    }

    #[test]
    #[serial]
    fn test_settings_file_is_read_from_root() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            "flavor = \"demo\"\ntarget = \"both\"\nprod = true\napp_version = \"20200407.2\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&SelectionArgs::default(), dir.path()).unwrap();
        assert_eq!(settings.flavor, Flavor::Demo);
        assert_eq!(settings.target, Target::Both);
        assert!(settings.prod);
        assert_eq!(settings.app_version.as_deref(), Some("20200407.2"));
        assert_eq!(settings.log_level, LogLevel::Debug);
    }

    #[test]
    #[serial]
    fn test_cli_overrides_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            "flavor = \"demo\"\ntarget = \"es5\"\n",
        )
        .unwrap();

        let args = SelectionArgs {
            flavor: Some(FlavorArg::App),
            target: Some(Target::Latest),
            stats: true,
            ..SelectionArgs::default()
        };
        let settings = Settings::load_from(&args, dir.path()).unwrap();
        assert_eq!(settings.flavor, Flavor::App);
        assert_eq!(settings.target, Target::Latest);
        assert!(settings.stats);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "target = \"latest\"\n").unwrap();

        unsafe {
            std::env::set_var("FRONTKIT_TARGET", "es5");
            std::env::set_var("FRONTKIT_APP_VERSION", "20200407.2");
        }
        let result = Settings::load_from(&SelectionArgs::default(), dir.path());
        clear_env();

        let settings = result.unwrap();
        assert_eq!(settings.target, Target::Es5);
        assert_eq!(settings.app_version.as_deref(), Some("20200407.2"));
    }

    #[test]
    #[serial]
    fn test_conventional_build_variables() {
        clear_env();
        let dir = TempDir::new().unwrap();

        unsafe {
            std::env::set_var("NODE_ENV", "production");
            std::env::set_var("STATS", "1");
        }
        let result = Settings::load_from(&SelectionArgs::default(), dir.path());
        clear_env();

        let settings = result.unwrap();
        assert!(settings.prod);
        assert!(settings.stats);
    }

    #[test]
    fn test_conventional_overrides_only_switch_on() {
        assert_eq!(
            conventional_overrides(Some("development"), Some("0")),
            SettingsOverrides::default()
        );
        let overrides = conventional_overrides(Some("production"), None);
        assert_eq!(overrides.prod, Some(true));
        assert_eq!(overrides.stats, None);
    }

    #[test]
    #[serial]
    fn test_relative_root_is_resolved() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let args = SelectionArgs {
            root: Some(PathBuf::from("./frontend/../frontend")),
            ..SelectionArgs::default()
        };
        let settings = Settings::load_from(&args, dir.path()).unwrap();
        assert_eq!(settings.root, dir.path().join("frontend"));
    }

    #[test]
    #[serial]
    fn test_missing_explicit_settings_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let args = SelectionArgs {
            config: Some(PathBuf::from("custom.toml")),
            ..SelectionArgs::default()
        };
        match Settings::load_from(&args, dir.path()) {
            Err(CliError::Settings(SettingsError::NotFound(path))) => {
                assert!(path.ends_with("custom.toml"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_invalid_value_in_settings_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "target = \"es3\"\n").unwrap();

        assert!(matches!(
            Settings::load_from(&SelectionArgs::default(), dir.path()),
            Err(CliError::Settings(SettingsError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_version_provider_prefers_fixed_version() {
        let settings = Settings {
            app_version: Some("1.2.3".to_string()),
            ..Settings::default_config()
        };
        assert_eq!(settings.version_provider().version().unwrap(), "1.2.3");
    }

    #[test]
    fn test_version_provider_reads_setup_py() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("setup.py"), "version=\"20200101.1\"").unwrap();
        let settings = Settings {
            root: dir.path().to_path_buf(),
            ..Settings::default_config()
        };
        assert_eq!(settings.version_provider().version().unwrap(), "20200101.1");
    }

    #[test]
    #[serial]
    fn test_env_root_selects_its_settings_file() {
        clear_env();
        let repo = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        fs::write(repo.path().join(SETTINGS_FILE), "flavor = \"demo\"\n").unwrap();

        unsafe { std::env::set_var("FRONTKIT_ROOT", repo.path()) };
        let result = Settings::load_from(&SelectionArgs::default(), elsewhere.path());
        clear_env();

        let settings = result.unwrap();
        assert_eq!(settings.root, repo.path());
        assert_eq!(settings.flavor, Flavor::Demo);
    }

    #[test]
    #[serial]
    fn test_relative_env_root_is_resolved_against_cwd() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("frontend")).unwrap();
        fs::write(
            dir.path().join("frontend").join(SETTINGS_FILE),
            "target = \"es5\"\n",
        )
        .unwrap();

        unsafe { std::env::set_var("FRONTKIT_ROOT", "frontend") };
        let result = Settings::load_from(&SelectionArgs::default(), dir.path());
        clear_env();

        let settings = result.unwrap();
        assert_eq!(settings.root, dir.path().join("frontend"));
        assert_eq!(settings.target, Target::Es5);
    }

    #[test]
    #[serial]
    fn test_cli_root_wins_over_env_root_for_settings_file() {
        clear_env();
        let env_repo = TempDir::new().unwrap();
        let cli_repo = TempDir::new().unwrap();
        fs::write(env_repo.path().join(SETTINGS_FILE), "flavor = \"demo\"\n").unwrap();

        unsafe { std::env::set_var("FRONTKIT_ROOT", env_repo.path()) };
        let args = SelectionArgs {
            root: Some(cli_repo.path().to_path_buf()),
            ..SelectionArgs::default()
        };
        let result = Settings::load_from(&args, env_repo.path());
        clear_env();

        let settings = result.unwrap();
        assert_eq!(settings.root, cli_repo.path());
        assert_eq!(settings.flavor, Flavor::App);
    }

    #[test]
    #[serial]
    fn test_file_root_is_relative_to_the_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("conf")).unwrap();
        let file = dir.path().join("conf").join("custom.toml");
        fs::write(&file, "root = \"../frontend\"\n").unwrap();

        let args = SelectionArgs {
            config: Some(file),
            ..SelectionArgs::default()
        };
        let settings = Settings::load_from(&args, elsewhere.path()).unwrap();
        assert_eq!(settings.root, dir.path().join("frontend"));
    }
}
