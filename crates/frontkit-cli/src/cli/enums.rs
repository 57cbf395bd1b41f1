use clap::ValueEnum;
use frontkit_config::{Axes, Flavor};
use serde::{Deserialize, Serialize};

/// Which module-format builds to configure
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Native modules for current browsers (`frontend_latest`)
    #[default]
    #[value(name = "latest")]
    Latest,

    /// Downleveled bundles for legacy browsers (`frontend_es5`)
    #[value(name = "es5")]
    Es5,

    /// Both builds, latest first
    #[value(name = "both")]
    Both,
}

impl Target {
    /// Axis sets selected by this target.
    pub fn axes(self, is_prod_build: bool, is_stats_build: bool) -> Vec<Axes> {
        let latest = |latest_build| Axes::new(is_prod_build, latest_build, is_stats_build);
        match self {
            Target::Latest => vec![latest(true)],
            Target::Es5 => vec![latest(false)],
            Target::Both => vec![latest(true), latest(false)],
        }
    }
}

/// Bundle flavor
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum FlavorArg {
    /// The main application
    #[value(name = "app")]
    App,

    /// The standalone demo harness
    #[value(name = "demo")]
    Demo,
}

impl From<FlavorArg> for Flavor {
    fn from(arg: FlavorArg) -> Self {
        match arg {
            FlavorArg::App => Flavor::App,
            FlavorArg::Demo => Flavor::Demo,
        }
    }
}
