//! Configuration factory.
//!
//! Combines an entry-point map, an output root and the axis flags into one
//! [`BuildConfiguration`]: output routing, define table, plugin pipeline and
//! chunk groups. The factory has no failure modes of its own; the only error
//! it can return comes from the version provider.

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::axes::Axes;
use crate::define::{self, DefineTable};
use crate::entry::EntryPoints;
use crate::env::VersionProvider;
use crate::error::Result;
use crate::pipeline::{self, Pipeline};

/// Emitted module format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleFormat {
    /// Native ES modules
    #[serde(rename = "es")]
    Module,
    /// Self-executing function bundles for legacy browsers
    #[serde(rename = "iife")]
    LegacyImmediate,
}

impl ModuleFormat {
    pub fn for_axes(axes: Axes) -> Self {
        if axes.latest_build {
            Self::Module
        } else {
            Self::LegacyImmediate
        }
    }
}

/// Modules forced into shared named chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChunkGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl ChunkGroups {
    /// The UI framework core, emitted once instead of per entry point.
    pub fn framework() -> Self {
        let mut groups = IndexMap::new();
        groups.insert(
            "lit".to_string(),
            vec!["lit-html".to_string(), "lit-element".to_string()],
        );
        Self { groups }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Options read by the engine while building the module graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputOptions {
    #[serde(rename = "input")]
    pub entry_points: EntryPoints,

    /// Entries that emit no code (style-only, side-effect-only) must not warn
    pub preserve_entry_signatures: bool,

    #[serde(rename = "plugins")]
    pub pipeline: Pipeline,

    #[serde(rename = "manualChunks")]
    pub chunk_groups: ChunkGroups,
}

/// Where and how chunks are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub dir: PathBuf,

    pub format: ModuleFormat,

    /// Exports are inlined across chunk boundaries, never live references
    pub external_live_bindings: bool,
}

/// Everything the bundling engine needs for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    pub axes: Axes,

    #[serde(rename = "inputOptions")]
    pub input: InputOptions,

    #[serde(rename = "outputOptions")]
    pub output: OutputOptions,

    pub define: DefineTable,
}

impl BuildConfiguration {
    pub fn entry_points(&self) -> &EntryPoints {
        &self.input.entry_points
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.input.pipeline
    }

    pub fn output_dir(&self) -> &Path {
        &self.output.dir
    }
}

/// Factory input.
#[derive(Debug, Clone)]
pub struct ConfigRequest {
    pub entry_points: EntryPoints,
    pub output_root: PathBuf,
    pub define_overlay: Option<DefineTable>,
    pub axes: Axes,
}

impl ConfigRequest {
    pub fn new(entry_points: EntryPoints, output_root: impl Into<PathBuf>, axes: Axes) -> Self {
        Self {
            entry_points,
            output_root: output_root.into(),
            define_overlay: None,
            axes,
        }
    }

    pub fn with_overlay(mut self, overlay: DefineTable) -> Self {
        self.define_overlay = Some(overlay);
        self
    }
}

/// `{output_root}/frontend_latest` or `{output_root}/frontend_es5`.
pub fn output_dir(output_root: &Path, latest_build: bool) -> PathBuf {
    let target = if latest_build {
        crate::axes::BuildTarget::Latest
    } else {
        crate::axes::BuildTarget::Es5
    };
    output_root.join(target.dir_name()).clean()
}

/// Build one configuration.
pub fn create(request: ConfigRequest, version: &dyn VersionProvider) -> Result<BuildConfiguration> {
    let ConfigRequest {
        entry_points,
        output_root,
        define_overlay,
        axes,
    } = request;

    let version = version.version()?;
    let define = define::build(axes, &version, define_overlay.as_ref());
    let pipeline = pipeline::assemble(axes, &define);

    let output = OutputOptions {
        dir: output_dir(&output_root, axes.latest_build),
        format: ModuleFormat::for_axes(axes),
        external_live_bindings: false,
    };

    tracing::debug!(
        entries = entry_points.len(),
        dir = %output.dir.display(),
        format = ?output.format,
        prod = axes.is_prod_build,
        stats = axes.is_stats_build,
        "created build configuration"
    );

    Ok(BuildConfiguration {
        axes,
        input: InputOptions {
            entry_points,
            preserve_entry_signatures: false,
            pipeline,
            chunk_groups: ChunkGroups::framework(),
        },
        output,
        define,
    })
}
