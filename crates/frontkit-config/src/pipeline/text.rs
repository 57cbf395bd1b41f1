use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Serialize;
use std::path::Path;

use super::{Compiled, ModuleRecord, PipelineStage, StagePhase, TEXT_INCLUDE, owned};
use crate::error::{ConfigError, Result};

/// Imports matching files as their literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawTextImport {
    include: Vec<String>,
    #[serde(skip)]
    matcher: Compiled<GlobSet>,
}

impl RawTextImport {
    pub fn new(include: Vec<String>) -> Self {
        Self {
            include,
            matcher: Compiled::default(),
        }
    }

    pub fn include(&self) -> &[String] {
        &self.include
    }

    /// Whether `path` is imported as text.
    pub fn matches(&self, path: &Path) -> Result<bool> {
        let set = self.matcher.get_or_try_init(|| glob_set(&self.include))?;
        Ok(set.is_match(path))
    }
}

impl Default for RawTextImport {
    fn default() -> Self {
        Self::new(owned(&TEXT_INCLUDE))
    }
}

impl PipelineStage for RawTextImport {
    fn name(&self) -> &'static str {
        "raw-text-import"
    }

    fn phase(&self) -> StagePhase {
        StagePhase::Assets
    }

    fn apply(&self, mut module: ModuleRecord) -> Result<ModuleRecord> {
        if !self.matches(&module.id)? {
            return Ok(module);
        }
        let literal = serde_json::to_string(&module.code)?;
        module.code = format!("export default {literal};");
        Ok(module)
    }
}

/// Globs match case-insensitively, like extensions.
pub(crate) fn glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::InvalidValue(format!("glob '{pattern}': {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| ConfigError::InvalidValue(format!("glob set: {e}")))
}
