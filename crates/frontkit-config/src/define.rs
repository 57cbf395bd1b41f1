//! Compile-time constant table.
//!
//! Maps symbolic names found in application source (`__DEV__`,
//! `process.env.NODE_ENV`, ...) to the literal text substituted for them at
//! build time.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::axes::Axes;

pub const DEV: &str = "__DEV__";
pub const BUILD: &str = "__BUILD__";
pub const VERSION: &str = "__VERSION__";
pub const DEMO: &str = "__DEMO__";
pub const BACKWARDS_COMPAT: &str = "__BACKWARDS_COMPAT__";
pub const STATIC_PATH: &str = "__STATIC_PATH__";
pub const NODE_ENV: &str = "process.env.NODE_ENV";

/// Every name application source reads. A table missing any of these breaks
/// substitution downstream.
pub const REQUIRED_DEFINES: [&str; 7] = [
    DEV,
    BUILD,
    VERSION,
    DEMO,
    BACKWARDS_COMPAT,
    STATIC_PATH,
    NODE_ENV,
];

const STATIC_BASE: &str = "/static/";

/// A replacement value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefineValue {
    /// Rendered as `true` / `false`
    Bool(bool),
    /// Substituted verbatim
    Raw(String),
    /// Substituted as a JSON string literal (quoted and escaped)
    Json(String),
}

impl DefineValue {
    pub fn json(value: impl Into<String>) -> Self {
        Self::Json(value.into())
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    /// The exact text placed into source.
    pub fn render(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Raw(text) => text.clone(),
            Self::Json(text) => serde_json::Value::String(text.clone()).to_string(),
        }
    }
}

impl Serialize for DefineValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

/// Ordered symbol -> replacement map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefineTable {
    entries: IndexMap<String, DefineValue>,
}

impl DefineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`build`].
    pub fn build(axes: Axes, version: &str, overlay: Option<&DefineTable>) -> DefineTable {
        build(axes, version, overlay)
    }

    /// Builder-style insert. A repeated key keeps its first position and takes
    /// the new value.
    pub fn with(mut self, key: impl Into<String>, value: DefineValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&DefineValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DefineValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Rendered replacement for `key`, if present.
    pub fn rendered(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(DefineValue::render)
    }

    /// New table with `overlay` applied on top of `self`.
    ///
    /// Overlay values win for shared keys; keys only in the overlay are
    /// appended. Neither input is modified.
    pub fn merged(&self, overlay: &DefineTable) -> DefineTable {
        let mut entries = self.entries.clone();
        for (key, value) in &overlay.entries {
            entries.insert(key.clone(), value.clone());
        }
        DefineTable { entries }
    }

    /// Required names absent from this table, in declaration order.
    pub fn missing_required(&self) -> Vec<String> {
        REQUIRED_DEFINES
            .iter()
            .filter(|key| !self.contains(key))
            .map(|key| (*key).to_string())
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, DefineValue)> for DefineTable {
    fn from_iter<I: IntoIterator<Item = (K, DefineValue)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self { entries }
    }
}

/// Default table for `axes`, with an optional overlay applied last.
pub fn build(axes: Axes, version: &str, overlay: Option<&DefineTable>) -> DefineTable {
    let base = DefineTable::new()
        .with(DEV, DefineValue::Bool(!axes.is_prod_build))
        .with(BUILD, DefineValue::json(axes.target().as_str()))
        .with(VERSION, DefineValue::json(version))
        .with(DEMO, DefineValue::Bool(false))
        .with(BACKWARDS_COMPAT, DefineValue::Bool(false))
        .with(STATIC_PATH, DefineValue::raw(STATIC_BASE))
        .with(NODE_ENV, DefineValue::json(axes.mode().as_str()));

    match overlay {
        Some(overlay) => base.merged(overlay),
        None => base,
    }
}
