use serde::Serialize;

use super::{ModuleRecord, PipelineStage, SOURCE_EXTENSIONS, StagePhase, owned};
use crate::axes::BuildTarget;
use crate::error::Result;

/// Target ECMAScript version for downleveling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 5 (legacy browsers)
    ES5,
    /// ECMAScript 2017 (native modules, async functions)
    ES2017,
}

/// Transform presets, applied last to first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Full syntax downleveling to the target; module syntax is left intact
    Env,
    /// Strip TypeScript syntax
    TypeScript,
}

/// Individual syntax transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum SyntaxPlugin {
    Decorators {
        #[serde(rename = "decoratorsBeforeExport")]
        before_export: bool,
    },
    ClassProperties {
        loose: bool,
    },
    OptionalChaining,
    NullishCoalescing,
    DynamicImport,
}

/// Settings handed to the transpiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformSettings {
    pub target: EsTarget,

    pub presets: Vec<Preset>,

    pub plugins: Vec<SyntaxPlugin>,

    /// Let the transpiler rewrite import/export syntax
    pub transform_modules: bool,
}

impl TransformSettings {
    /// Lighter set: the browsers receiving native modules already support
    /// ES2017, so only TypeScript and proposal syntax are lowered.
    pub fn latest() -> Self {
        Self {
            target: EsTarget::ES2017,
            presets: vec![Preset::TypeScript],
            plugins: syntax_plugins(),
            transform_modules: false,
        }
    }

    /// Fuller set for legacy browsers.
    pub fn es5() -> Self {
        Self {
            target: EsTarget::ES5,
            presets: vec![Preset::Env, Preset::TypeScript],
            plugins: syntax_plugins(),
            transform_modules: false,
        }
    }
}

fn syntax_plugins() -> Vec<SyntaxPlugin> {
    vec![
        SyntaxPlugin::Decorators {
            before_export: true,
        },
        SyntaxPlugin::ClassProperties { loose: true },
        SyntaxPlugin::OptionalChaining,
        SyntaxPlugin::NullishCoalescing,
        SyntaxPlugin::DynamicImport,
    ]
}

/// Source transformation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceTransform {
    /// Only files with these extensions are transformed
    pub extensions: Vec<String>,

    pub settings: TransformSettings,
}

impl SourceTransform {
    pub fn for_target(target: BuildTarget) -> Self {
        let settings = match target {
            BuildTarget::Latest => TransformSettings::latest(),
            BuildTarget::Es5 => TransformSettings::es5(),
        };
        Self {
            extensions: owned(&SOURCE_EXTENSIONS),
            settings,
        }
    }

    pub fn matches(&self, module: &ModuleRecord) -> bool {
        module
            .extension()
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

impl PipelineStage for SourceTransform {
    fn name(&self) -> &'static str {
        "source-transform"
    }

    fn phase(&self) -> StagePhase {
        StagePhase::Transform
    }

    // Transpilation belongs to the engine; this stage only carries settings.
    fn apply(&self, module: ModuleRecord) -> Result<ModuleRecord> {
        Ok(module)
    }
}
