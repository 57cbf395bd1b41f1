use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Named entry points. Each name becomes its own output chunk, so names are
/// unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryPoints {
    entries: IndexMap<String, PathBuf>,
}

impl EntryPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, rejecting a name that is already declared.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(ConfigError::DuplicateEntry(name));
        }
        self.entries.insert(name, path.into());
        Ok(())
    }

    pub fn from_pairs<N, P, I>(pairs: I) -> Result<Self>
    where
        N: Into<String>,
        P: Into<PathBuf>,
        I: IntoIterator<Item = (N, P)>,
    {
        let mut entries = Self::new();
        for (name, path) in pairs {
            entries.insert(name, path)?;
        }
        Ok(entries)
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
