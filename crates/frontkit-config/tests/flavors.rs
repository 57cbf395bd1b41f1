//! End-to-end configuration scenarios for both flavors across every axis
//! combination.

use frontkit_config::{
    APP_ENTRIES, Axes, BuildTarget, DefineValue, Flavor, ModuleFormat, ProjectPaths,
    StaticVersion, define,
};
use std::path::{Path, PathBuf};

const VERSION: &str = "20200407.2";

fn paths() -> ProjectPaths {
    ProjectPaths::from_root("/srv/frontend")
}

#[test]
fn app_prod_latest_scenario() {
    let config = Flavor::App
        .build(Axes::new(true, true, false), &paths(), &StaticVersion::new(VERSION))
        .expect("app config");

    assert_eq!(
        config.output_dir(),
        Path::new("/srv/frontend/frontend_latest")
    );
    assert_eq!(config.output.format, ModuleFormat::Module);
    assert_eq!(
        config.define.rendered(define::BUILD).as_deref(),
        Some("\"latest\"")
    );
    assert_eq!(config.define.get(define::DEV), Some(&DefineValue::Bool(false)));
    assert_eq!(
        config.define.rendered(define::VERSION).as_deref(),
        Some("\"20200407.2\"")
    );
    assert_eq!(config.define.get(define::DEMO), Some(&DefineValue::Bool(false)));
}

#[test]
fn demo_dev_es5_scenario() {
    let config = Flavor::Demo
        .build(Axes::new(false, false, false), &paths(), &StaticVersion::new(VERSION))
        .expect("demo config");

    assert_eq!(
        config.output_dir(),
        Path::new("/srv/frontend/demo/dist/frontend_es5")
    );
    assert_eq!(config.output.format, ModuleFormat::LegacyImmediate);
    assert_eq!(
        config.define.rendered(define::VERSION).as_deref(),
        Some("\"DEMO-20200407.2\"")
    );
    assert_eq!(config.define.get(define::DEMO), Some(&DefineValue::Bool(true)));
    assert_eq!(config.define.get(define::DEV), Some(&DefineValue::Bool(true)));
    assert_eq!(
        config.define.rendered(define::NODE_ENV).as_deref(),
        Some("\"development\"")
    );
}

#[test]
fn every_axis_combination_is_deterministic() {
    let version = StaticVersion::new(VERSION);
    for flavor in [Flavor::App, Flavor::Demo] {
        for axes in Axes::all() {
            let first = flavor.build(axes, &paths(), &version).unwrap();
            let second = flavor.build(axes, &paths(), &version).unwrap();
            assert_eq!(first, second, "{flavor} {axes:?}");
        }
    }
}

#[test]
fn output_dir_follows_target_for_both_flavors() {
    let version = StaticVersion::new(VERSION);
    let roots = [
        (Flavor::App, PathBuf::from("/srv/frontend")),
        (Flavor::Demo, PathBuf::from("/srv/frontend/demo/dist")),
    ];
    for (flavor, root) in roots {
        for axes in Axes::all() {
            let config = flavor.build(axes, &paths(), &version).unwrap();
            let expected = match axes.target() {
                BuildTarget::Latest => root.join("frontend_latest"),
                BuildTarget::Es5 => root.join("frontend_es5"),
            };
            assert_eq!(config.output_dir(), expected);
        }
    }
}

#[test]
fn dev_and_build_constants_track_axes() {
    let version = StaticVersion::new(VERSION);
    for flavor in [Flavor::App, Flavor::Demo] {
        for axes in Axes::all() {
            let config = flavor.build(axes, &paths(), &version).unwrap();
            assert_eq!(
                config.define.get(define::DEV),
                Some(&DefineValue::Bool(!axes.is_prod_build))
            );
            let build = config.define.rendered(define::BUILD).unwrap();
            assert_eq!(build == "\"latest\"", axes.latest_build);
        }
    }
}

#[test]
fn demo_always_stamps_version_and_flag() {
    let version = StaticVersion::new(VERSION);
    for axes in Axes::all() {
        let config = Flavor::Demo.build(axes, &paths(), &version).unwrap();
        let stamped = config.define.get(define::VERSION).unwrap();
        assert_eq!(stamped, &DefineValue::json(format!("DEMO-{VERSION}")));
        assert_eq!(config.define.get(define::DEMO), Some(&DefineValue::Bool(true)));
    }
}

#[test]
fn entry_sets_are_fixed_per_flavor() {
    let version = StaticVersion::new(VERSION);
    for axes in Axes::all() {
        let app = Flavor::App.build(axes, &paths(), &version).unwrap();
        assert_eq!(app.entry_points().names().collect::<Vec<_>>(), APP_ENTRIES);

        let demo = Flavor::Demo.build(axes, &paths(), &version).unwrap();
        assert_eq!(
            demo.entry_points().names().collect::<Vec<_>>(),
            vec!["main", "compatibility"]
        );
    }
}

#[test]
fn stats_flag_changes_only_the_recorded_axes() {
    let version = StaticVersion::new(VERSION);
    for flavor in [Flavor::App, Flavor::Demo] {
        for axes in Axes::all().into_iter().filter(|a| !a.is_stats_build) {
            let plain = flavor.build(axes, &paths(), &version).unwrap();
            let stats_axes = Axes {
                is_stats_build: true,
                ..axes
            };
            let mut stats = flavor.build(stats_axes, &paths(), &version).unwrap();

            assert!(stats.axes.is_stats_build);
            stats.axes = plain.axes;
            assert_eq!(stats, plain);
        }
    }
}

#[test]
fn configuration_serializes_for_the_engine() {
    let config = Flavor::Demo
        .build(Axes::new(true, false, false), &paths(), &StaticVersion::new(VERSION))
        .unwrap();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["outputOptions"]["format"], "iife");
    assert_eq!(
        json["outputOptions"]["dir"],
        "/srv/frontend/demo/dist/frontend_es5"
    );
    assert_eq!(json["inputOptions"]["plugins"].as_array().unwrap().len(), 6);
    assert_eq!(json["define"]["__DEMO__"], "true");
    assert_eq!(json["define"]["__VERSION__"], "\"DEMO-20200407.2\"");
}

#[test]
fn flavors_build_concurrently() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<frontkit_config::BuildConfiguration>();
    assert_send_sync::<ProjectPaths>();

    let handles: Vec<_> = [Flavor::App, Flavor::Demo]
        .into_iter()
        .map(|flavor| {
            std::thread::spawn(move || {
                flavor.build(Axes::default(), &paths(), &StaticVersion::new(VERSION))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
