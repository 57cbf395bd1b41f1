//! Build axes: the three orthogonal flags that select a configuration.

use serde::{Deserialize, Serialize};

/// Axis flags for one build invocation.
///
/// All eight combinations are valid. `is_stats_build` is carried through to the
/// produced configuration but does not change any derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axes {
    /// Production build (false = development)
    #[serde(default)]
    pub is_prod_build: bool,

    /// Modern module target (false = legacy es5)
    #[serde(default)]
    pub latest_build: bool,

    /// Analysis build
    #[serde(default)]
    pub is_stats_build: bool,
}

impl Axes {
    pub fn new(is_prod_build: bool, latest_build: bool, is_stats_build: bool) -> Self {
        Self {
            is_prod_build,
            latest_build,
            is_stats_build,
        }
    }

    /// Every combination of the three flags.
    pub fn all() -> [Axes; 8] {
        let mut combos = [Axes::default(); 8];
        for (bits, slot) in combos.iter_mut().enumerate() {
            *slot = Axes::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
        }
        combos
    }

    pub fn target(&self) -> BuildTarget {
        if self.latest_build {
            BuildTarget::Latest
        } else {
            BuildTarget::Es5
        }
    }

    pub fn mode(&self) -> BuildMode {
        if self.is_prod_build {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }
}

/// Module-format target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    /// Native modules for current browsers
    Latest,
    /// Downleveled bundles for legacy browsers
    Es5,
}

impl BuildTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Es5 => "es5",
        }
    }

    /// Directory name under the output root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Latest => "frontend_latest",
            Self::Es5 => "frontend_es5",
        }
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environment mode seen by application code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Production,
    Development,
}

impl BuildMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
