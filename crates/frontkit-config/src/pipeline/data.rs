use serde::Serialize;

use super::{DATA_EXTENSIONS, ModuleRecord, PipelineStage, StagePhase, owned};
use crate::error::Result;

/// Lets JSON files be imported as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonImport {
    pub extensions: Vec<String>,
}

impl Default for JsonImport {
    fn default() -> Self {
        Self {
            extensions: owned(&DATA_EXTENSIONS),
        }
    }
}

impl JsonImport {
    pub fn matches(&self, module: &ModuleRecord) -> bool {
        module
            .extension()
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

impl PipelineStage for JsonImport {
    fn name(&self) -> &'static str {
        "json-import"
    }

    fn phase(&self) -> StagePhase {
        StagePhase::Data
    }

    fn apply(&self, module: ModuleRecord) -> Result<ModuleRecord> {
        if self.matches(&module) {
            tracing::trace!(module = %module.id.display(), "data import");
        }
        Ok(module)
    }
}
