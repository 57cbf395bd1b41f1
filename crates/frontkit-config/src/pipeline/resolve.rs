use globset::GlobSet;
use path_clean::PathClean;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{
    Compiled, DATA_EXTENSIONS, ModuleRecord, PipelineStage, SOURCE_EXTENSIONS, StagePhase,
    TEXT_INCLUDE, extension_of, owned, text,
};
use crate::error::{ConfigError, Result};

/// Specifier resolution settings plus the import allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResolution {
    /// Extensions probed for extensionless specifiers, in order
    pub extensions: Vec<String>,

    /// Prefer the `browser` field of package manifests
    pub browser: bool,

    /// Platform built-ins are not assumed to exist
    pub prefer_builtins: bool,

    /// Extensions accepted as data imports
    pub data_extensions: Vec<String>,

    /// Globs accepted as text imports
    text_include: Vec<String>,

    #[serde(skip)]
    text_matcher: Compiled<GlobSet>,

    #[serde(skip)]
    import_pattern: Compiled<Regex>,
}

/// Static `import`/`export ... from`, side-effect and dynamic `import()`
/// specifiers.
const IMPORT_PATTERN: &str = r#"(?:\bfrom|\bimport)\s*\(?\s*["']([^"'\n]+)["']"#;

/// Outcome of resolving one specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A concrete file on disk
    File(PathBuf),
    /// A bare package specifier, looked up by the engine
    Package(String),
}

impl ModuleResolution {
    /// Browser-targeted resolution over the default source extensions.
    pub fn browser() -> Self {
        Self {
            extensions: owned(&SOURCE_EXTENSIONS),
            browser: true,
            prefer_builtins: false,
            data_extensions: owned(&DATA_EXTENSIONS),
            text_include: owned(&TEXT_INCLUDE),
            text_matcher: Compiled::default(),
            import_pattern: Compiled::default(),
        }
    }

    pub fn text_include(&self) -> &[String] {
        &self.text_include
    }

    /// Whether `path` may be imported at all. Extensions and text globs both
    /// match case-insensitively.
    pub fn is_allowed(&self, path: &Path) -> Result<bool> {
        if let Some(ext) = extension_of(path) {
            if self.extensions.contains(&ext) || self.data_extensions.contains(&ext) {
                return Ok(true);
            }
        }
        let text = self
            .text_matcher
            .get_or_try_init(|| text::glob_set(&self.text_include))?;
        Ok(text.is_match(path))
    }

    /// Whether `module` is source code whose imports are resolved here.
    pub fn is_source(&self, module: &ModuleRecord) -> bool {
        module
            .extension()
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// Import specifiers in `code`, first occurrence order, without
    /// duplicates.
    pub fn import_specifiers<'a>(&self, code: &'a str) -> Result<Vec<&'a str>> {
        let pattern = self.import_pattern.get_or_try_init(|| {
            Regex::new(IMPORT_PATTERN)
                .map_err(|e| ConfigError::InvalidValue(format!("import pattern: {e}")))
        })?;

        let mut specifiers: Vec<&str> = Vec::new();
        for captures in pattern.captures_iter(code) {
            if let Some(found) = captures.get(1) {
                if !specifiers.contains(&found.as_str()) {
                    specifiers.push(found.as_str());
                }
            }
        }
        Ok(specifiers)
    }

    /// Resolve every import of a source module. Modules that are not source
    /// code have no imports. The first unresolvable specifier is fatal.
    pub fn resolve_imports(
        &self,
        module: &ModuleRecord,
        exists: impl Fn(&Path) -> bool,
    ) -> Result<Vec<(String, Resolution)>> {
        if !self.is_source(module) {
            return Ok(Vec::new());
        }
        self.import_specifiers(&module.code)?
            .into_iter()
            .map(|specifier| {
                let resolution = self.resolve(specifier, &module.id, &exists)?;
                Ok((specifier.to_string(), resolution))
            })
            .collect()
    }

    /// Resolve `specifier` as imported from `importer`.
    ///
    /// Relative and absolute specifiers must name an existing file, either
    /// exactly, with one of the configured extensions appended, or as an
    /// `index` module inside a directory. `exists` is the filesystem probe.
    pub fn resolve(
        &self,
        specifier: &str,
        importer: &Path,
        exists: impl Fn(&Path) -> bool,
    ) -> Result<Resolution> {
        if !is_path_like(specifier) {
            return Ok(Resolution::Package(specifier.to_string()));
        }

        let base_dir = importer.parent().unwrap_or_else(|| Path::new(""));
        let base = base_dir.join(specifier).clean();

        self.candidates(&base)
            .into_iter()
            .find(|candidate| exists(candidate.as_path()))
            .map(Resolution::File)
            .ok_or_else(|| ConfigError::Unresolved {
                specifier: specifier.to_string(),
                importer: importer.to_path_buf(),
            })
    }

    fn candidates(&self, base: &Path) -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(1 + self.extensions.len() * 2);
        if base.extension().is_some() {
            candidates.push(base.to_path_buf());
        }
        for ext in &self.extensions {
            let mut with_ext = base.as_os_str().to_os_string();
            with_ext.push(ext);
            candidates.push(PathBuf::from(with_ext));
        }
        for ext in &self.extensions {
            candidates.push(base.join(format!("index{ext}")));
        }
        candidates
    }
}

impl PipelineStage for ModuleResolution {
    fn name(&self) -> &'static str {
        "module-resolution"
    }

    fn phase(&self) -> StagePhase {
        StagePhase::Resolve
    }

    fn apply(&self, module: ModuleRecord) -> Result<ModuleRecord> {
        if self.is_allowed(&module.id)? {
            Ok(module)
        } else {
            Err(ConfigError::UnrecognizedExtension { path: module.id })
        }
    }
}

fn is_path_like(specifier: &str) -> bool {
    specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier == "."
        || specifier == ".."
        || specifier.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn disk(files: &[&str]) -> impl Fn(&Path) -> bool {
        let files: HashSet<PathBuf> = files.iter().map(PathBuf::from).collect();
        move |path: &Path| files.contains(path)
    }

    #[test]
    fn resolves_extensionless_relative_import() {
        let resolution = ModuleResolution::browser()
            .resolve(
                "../util/format",
                Path::new("/repo/src/panels/panel.ts"),
                disk(&["/repo/src/util/format.ts"]),
            )
            .unwrap();
        assert_eq!(
            resolution,
            Resolution::File(PathBuf::from("/repo/src/util/format.ts"))
        );
    }

    #[test]
    fn prefers_js_over_ts_in_declared_order() {
        let resolution = ModuleResolution::browser()
            .resolve(
                "./dual",
                Path::new("/repo/src/app.ts"),
                disk(&["/repo/src/dual.js", "/repo/src/dual.ts"]),
            )
            .unwrap();
        assert_eq!(resolution, Resolution::File(PathBuf::from("/repo/src/dual.js")));
    }

    #[test]
    fn resolves_directory_index() {
        let resolution = ModuleResolution::browser()
            .resolve(
                "./data",
                Path::new("/repo/src/app.ts"),
                disk(&["/repo/src/data/index.ts"]),
            )
            .unwrap();
        assert_eq!(
            resolution,
            Resolution::File(PathBuf::from("/repo/src/data/index.ts"))
        );
    }

    #[test]
    fn bare_specifiers_are_left_to_the_engine() {
        let resolution = ModuleResolution::browser()
            .resolve("lit-element", Path::new("/repo/src/app.ts"), disk(&[]))
            .unwrap();
        assert_eq!(resolution, Resolution::Package("lit-element".to_string()));
    }

    #[test]
    fn missing_target_is_fatal() {
        let err = ModuleResolution::browser()
            .resolve("./gone", Path::new("/repo/src/app.ts"), disk(&[]))
            .unwrap_err();
        match err {
            ConfigError::Unresolved {
                specifier,
                importer,
            } => {
                assert_eq!(specifier, "./gone");
                assert_eq!(importer, PathBuf::from("/repo/src/app.ts"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn allow_list_covers_source_data_and_text() {
        let stage = ModuleResolution::browser();
        for id in ["/a/b.ts", "/a/b.js", "/a/b.json", "/a/theme/b.css"] {
            assert!(stage.apply(ModuleRecord::new(id, "")).is_ok(), "{id}");
        }
        for id in ["/a/b.png", "/a/b.scss", "/a/Makefile"] {
            assert!(matches!(
                stage.apply(ModuleRecord::new(id, "")),
                Err(ConfigError::UnrecognizedExtension { .. })
            ));
        }
    }

    #[test]
    fn allow_list_ignores_case() {
        let stage = ModuleResolution::browser();
        for id in ["/a/Foo.JS", "/a/Data.Json", "/a/Theme.CSS"] {
            assert!(stage.is_allowed(Path::new(id)).unwrap(), "{id}");
        }
        assert!(!stage.is_allowed(Path::new("/a/Logo.PNG")).unwrap());
    }

    #[test]
    fn finds_every_import_form_once() {
        let code = r#"
import { html } from "lit-element";
import './polyfills';
export { format } from '../util/format';
const panel = import("./panel");
import { html as h } from "lit-element";
const note = "imported from nowhere";
"#;
        let specifiers = ModuleResolution::browser().import_specifiers(code).unwrap();
        assert_eq!(
            specifiers,
            vec!["lit-element", "./polyfills", "../util/format", "./panel"]
        );
    }

    #[test]
    fn resolves_imports_of_source_modules() {
        let module = ModuleRecord::new(
            "/repo/src/app.ts",
            "import { a } from './a';\nimport 'lit-html';\n",
        );
        let resolved = ModuleResolution::browser()
            .resolve_imports(&module, disk(&["/repo/src/a.ts"]))
            .unwrap();
        assert_eq!(
            resolved,
            vec![
                (
                    "./a".to_string(),
                    Resolution::File(PathBuf::from("/repo/src/a.ts"))
                ),
                (
                    "lit-html".to_string(),
                    Resolution::Package("lit-html".to_string())
                ),
            ]
        );
    }

    #[test]
    fn unresolved_import_stops_resolution() {
        let module = ModuleRecord::new("/repo/src/app.ts", "import './missing';");
        assert!(matches!(
            ModuleResolution::browser().resolve_imports(&module, disk(&[])),
            Err(ConfigError::Unresolved { .. })
        ));
    }

    #[test]
    fn non_source_modules_have_no_imports() {
        let module = ModuleRecord::new("/repo/src/theme.css", "@import './base.css';");
        let resolved = ModuleResolution::browser()
            .resolve_imports(&module, disk(&[]))
            .unwrap();
        assert!(resolved.is_empty());
    }
}
