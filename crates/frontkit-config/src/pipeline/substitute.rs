use regex::Regex;
use serde::Serialize;

use super::{Compiled, ModuleRecord, PipelineStage, StagePhase};
use crate::define::DefineTable;
use crate::error::{ConfigError, Result};

/// Replaces every define key in module text with its rendered value.
///
/// Keys match on word boundaries, longest first. An occurrence directly
/// followed by `.` is a property access on the symbol and is left alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantSubstitution {
    define: DefineTable,
    #[serde(skip)]
    pattern: Compiled<Regex>,
}

impl ConstantSubstitution {
    pub fn new(define: DefineTable) -> Self {
        Self {
            define,
            pattern: Compiled::default(),
        }
    }

    pub fn define(&self) -> &DefineTable {
        &self.define
    }

    /// Apply the table to `code`.
    pub fn substitute(&self, code: &str) -> Result<String> {
        if self.define.is_empty() {
            return Ok(code.to_string());
        }

        let pattern = self.pattern.get_or_try_init(|| key_pattern(&self.define))?;

        let mut output = String::with_capacity(code.len());
        let mut last = 0;
        for found in pattern.find_iter(code) {
            if code[found.end()..].starts_with('.') {
                continue;
            }
            let Some(replacement) = self.define.rendered(found.as_str()) else {
                continue;
            };
            output.push_str(&code[last..found.start()]);
            output.push_str(&replacement);
            last = found.end();
        }
        output.push_str(&code[last..]);
        Ok(output)
    }
}

/// Alternation of every key, longest first, on word boundaries.
fn key_pattern(define: &DefineTable) -> Result<Regex> {
    let mut keys: Vec<&str> = define.keys().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()));
    let alternation = keys
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b"))
        .map_err(|e| ConfigError::InvalidValue(format!("define pattern: {e}")))
}

impl PipelineStage for ConstantSubstitution {
    fn name(&self) -> &'static str {
        "constant-substitution"
    }

    fn phase(&self) -> StagePhase {
        StagePhase::Substitute
    }

    fn apply(&self, mut module: ModuleRecord) -> Result<ModuleRecord> {
        module.code = self.substitute(&module.code)?;
        Ok(module)
    }
}
