use indexmap::IndexMap;
use serde::Serialize;

use super::{ModuleRecord, PipelineStage, StagePhase};
use crate::error::Result;

/// Converts foreign module syntax into native modules.
///
/// Libraries whose exports cannot be detected statically get their named
/// exports declared here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignInterop {
    pub named_exports: IndexMap<String, Vec<String>>,
}

impl Default for ForeignInterop {
    fn default() -> Self {
        let mut named_exports = IndexMap::new();
        named_exports.insert(
            "js-yaml".to_string(),
            vec!["safeDump".to_string(), "safeLoad".to_string()],
        );
        Self { named_exports }
    }
}

impl ForeignInterop {
    pub fn named_exports_for(&self, package: &str) -> Option<&[String]> {
        self.named_exports.get(package).map(Vec::as_slice)
    }
}

impl PipelineStage for ForeignInterop {
    fn name(&self) -> &'static str {
        "foreign-interop"
    }

    fn phase(&self) -> StagePhase {
        StagePhase::Interop
    }

    // Conversion itself is done by the bundling engine.
    fn apply(&self, module: ModuleRecord) -> Result<ModuleRecord> {
        Ok(module)
    }
}
