//! Filesystem roots used by the flavor builders.

use std::path::{Path, PathBuf};

/// Named project roots.
pub trait PathRegistry {
    /// Repository root; output root of the app flavor
    fn root(&self) -> &Path;

    /// Directory holding the app entry modules
    fn entrypoints_dir(&self) -> &Path;

    /// Demo harness sources
    fn demo_dir(&self) -> &Path;

    /// Output root of the demo flavor
    fn demo_root(&self) -> &Path;

    /// Root of the package providing the legacy compatibility module
    fn compat_root(&self) -> &Path;

    /// Every root with its name, for validation and diagnostics.
    fn named_roots(&self) -> Vec<(&'static str, &Path)> {
        vec![
            ("repository", self.root()),
            ("entrypoints", self.entrypoints_dir()),
            ("demo", self.demo_dir()),
            ("demo output", self.demo_root()),
            ("compatibility", self.compat_root()),
        ]
    }
}

/// Conventional repository layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
    entrypoints_dir: PathBuf,
    demo_dir: PathBuf,
    demo_root: PathBuf,
    compat_root: PathBuf,
}

impl ProjectPaths {
    /// Layout rooted at `root`:
    /// - entrypoints: `root/src/entrypoints`
    /// - demo sources: `root/demo`
    /// - demo output: `root/demo/dist`
    /// - compatibility package: `root`
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let demo_dir = root.join("demo");
        Self {
            entrypoints_dir: root.join("src").join("entrypoints"),
            demo_root: demo_dir.join("dist"),
            demo_dir,
            compat_root: root.clone(),
            root,
        }
    }

    pub fn with_demo_dir(mut self, demo_dir: impl Into<PathBuf>) -> Self {
        self.demo_dir = demo_dir.into();
        self.demo_root = self.demo_dir.join("dist");
        self
    }

    pub fn with_compat_root(mut self, compat_root: impl Into<PathBuf>) -> Self {
        self.compat_root = compat_root.into();
        self
    }
}

impl PathRegistry for ProjectPaths {
    fn root(&self) -> &Path {
        &self.root
    }

    fn entrypoints_dir(&self) -> &Path {
        &self.entrypoints_dir
    }

    fn demo_dir(&self) -> &Path {
        &self.demo_dir
    }

    fn demo_root(&self) -> &Path {
        &self.demo_root
    }

    fn compat_root(&self) -> &Path {
        &self.compat_root
    }
}
