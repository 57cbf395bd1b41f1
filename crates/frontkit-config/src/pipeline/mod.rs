//! Plugin pipeline: the ordered stages every module passes through.
//!
//! Stages are plain values implementing [`PipelineStage`]. The pipeline is
//! assembled once per configuration and always has the same six stages in the
//! same order; only the source transform settings depend on the axes.

mod data;
mod interop;
mod resolve;
mod substitute;
mod text;
mod transform;

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::axes::Axes;
use crate::define::DefineTable;
use crate::error::Result;

pub use data::JsonImport;
pub use interop::ForeignInterop;
pub use resolve::{ModuleResolution, Resolution};
pub use substitute::ConstantSubstitution;
pub use text::RawTextImport;
pub use transform::{EsTarget, Preset, SourceTransform, SyntaxPlugin, TransformSettings};

/// Extensions handled as source code
pub const SOURCE_EXTENSIONS: [&str; 2] = [".js", ".ts"];

/// Extensions imported as structured data
pub const DATA_EXTENSIONS: [&str; 1] = [".json"];

/// Globs imported as literal text
pub const TEXT_INCLUDE: [&str; 1] = ["**/*.css"];

/// Names of the assembled stages, in run order
pub const STAGE_NAMES: [&str; 6] = [
    "module-resolution",
    "foreign-interop",
    "json-import",
    "source-transform",
    "raw-text-import",
    "constant-substitution",
];

/// A module flowing through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    pub id: PathBuf,
    pub code: String,
}

impl ModuleRecord {
    pub fn new(id: impl Into<PathBuf>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
        }
    }

    /// Lowercased extension with its leading dot (`.ts`).
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.id)
    }
}

pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Matcher compiled from a stage's patterns on first use and kept for the
/// stage's lifetime. Equal to every other instance, so stage equality only
/// compares the patterns.
#[derive(Debug, Clone)]
pub(crate) struct Compiled<T>(OnceLock<T>);

impl<T> Compiled<T> {
    pub(crate) fn get_or_try_init(&self, init: impl FnOnce() -> Result<T>) -> Result<&T> {
        if let Some(value) = self.0.get() {
            return Ok(value);
        }
        let value = init()?;
        Ok(self.0.get_or_init(|| value))
    }

    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.0.get().is_some()
    }
}

impl<T> Default for Compiled<T> {
    fn default() -> Self {
        Self(OnceLock::new())
    }
}

impl<T> PartialEq for Compiled<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> Eq for Compiled<T> {}

/// Stage ordering. Lower phases run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StagePhase {
    /// Specifier resolution and the import allow-list
    Resolve = 0,
    /// Foreign module syntax to native modules
    Interop = 10,
    /// Structured data imports
    Data = 20,
    /// Syntax downleveling
    Transform = 30,
    /// Non-code assets imported as text
    Assets = 40,
    /// Constant substitution (always last)
    Substitute = 50,
}

/// Capability shared by every stage.
pub trait PipelineStage {
    /// Stable stage identifier
    fn name(&self) -> &'static str;

    fn phase(&self) -> StagePhase;

    /// Transform `module`, or hand it back unchanged when the stage does not
    /// apply to it.
    fn apply(&self, module: ModuleRecord) -> Result<ModuleRecord>;
}

/// One configured stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum Stage {
    ModuleResolution(ModuleResolution),
    ForeignInterop(ForeignInterop),
    JsonImport(JsonImport),
    SourceTransform(SourceTransform),
    RawTextImport(RawTextImport),
    ConstantSubstitution(ConstantSubstitution),
}

impl Stage {
    fn inner(&self) -> &dyn PipelineStage {
        match self {
            Self::ModuleResolution(stage) => stage,
            Self::ForeignInterop(stage) => stage,
            Self::JsonImport(stage) => stage,
            Self::SourceTransform(stage) => stage,
            Self::RawTextImport(stage) => stage,
            Self::ConstantSubstitution(stage) => stage,
        }
    }
}

impl PipelineStage for Stage {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn phase(&self) -> StagePhase {
        self.inner().phase()
    }

    fn apply(&self, module: ModuleRecord) -> Result<ModuleRecord> {
        self.inner().apply(module)
    }
}

macro_rules! impl_into_stage {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Stage {
                fn from(stage: $variant) -> Self {
                    Stage::$variant(stage)
                }
            }
        )*
    };
}

impl_into_stage!(
    ModuleResolution,
    ForeignInterop,
    JsonImport,
    SourceTransform,
    RawTextImport,
    ConstantSubstitution,
);

/// Ordered stage list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn source_transform(&self) -> Option<&SourceTransform> {
        self.stages.iter().find_map(|stage| match stage {
            Stage::SourceTransform(transform) => Some(transform),
            _ => None,
        })
    }

    pub fn resolution(&self) -> Option<&ModuleResolution> {
        self.stages.iter().find_map(|stage| match stage {
            Stage::ModuleResolution(resolution) => Some(resolution),
            _ => None,
        })
    }

    /// Thread `module` through every stage in order, stopping at the first
    /// failure.
    pub fn run(&self, module: ModuleRecord) -> Result<ModuleRecord> {
        self.stages.iter().try_fold(module, |module, stage| {
            tracing::trace!(stage = stage.name(), module = %module.id.display(), "applying stage");
            stage.apply(module)
        })
    }
}

/// Collects stages and orders them by phase.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    stages: Vec<Stage>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, stage: impl Into<Stage>) -> Self {
        self.stages.push(stage.into());
        self
    }

    /// Sort by phase once. The sort is stable, so stages sharing a phase keep
    /// insertion order.
    pub fn build(mut self) -> Pipeline {
        self.stages.sort_by_key(|stage| stage.phase());
        Pipeline {
            stages: self.stages,
        }
    }
}

/// The pipeline for `axes`, substituting constants from `define`.
pub fn assemble(axes: Axes, define: &DefineTable) -> Pipeline {
    let pipeline = PipelineBuilder::new()
        .add(ModuleResolution::browser())
        .add(ForeignInterop::default())
        .add(JsonImport::default())
        .add(SourceTransform::for_target(axes.target()))
        .add(RawTextImport::default())
        .add(ConstantSubstitution::new(define.clone()))
        .build();

    tracing::debug!(
        target_format = %axes.target(),
        stages = ?pipeline.names(),
        "assembled plugin pipeline"
    );
    pipeline
}
