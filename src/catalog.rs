// SPDX-License-Identifier: MPL-2.0
//! Translation store: one tree of strings per locale, addressed by dotted keys.
//!
//! # Invariants
//!
//! 1. **Read-only after load**: a [`TranslationStore`] never mutates, so it is
//!    shared behind an `Arc` by every session that needs it.
//! 2. **Leaves are strings**: numbers, booleans, arrays and `null` are
//!    rejected while loading, never at lookup time.
//! 3. **Shapes may differ**: a key present in one locale and absent in another
//!    is not an error. Lookups simply come back `None`.

use crate::error::{Error, Result};
use crate::locale::Locale;
use rust_embed::RustEmbed;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// One node of a translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(String),
    Branch(BTreeMap<String, Node>),
}

impl Default for Node {
    fn default() -> Self {
        Node::Branch(BTreeMap::new())
    }
}

impl Node {
    /// Parses a JSON document into a tree. The root must be an object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(Error::Catalog("translation root must be an object".into()));
        }
        Self::from_value(value, "")
    }

    fn from_value(value: Value, path: &str) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Node::Leaf(s)),
            Value::Object(map) => {
                let mut children = BTreeMap::new();
                for (key, child) in map {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    children.insert(key, Self::from_value(child, &child_path)?);
                }
                Ok(Node::Branch(children))
            }
            other => Err(Error::Catalog(format!(
                "leaves must be strings, found {} at '{}'",
                json_kind(&other),
                path
            ))),
        }
    }

    /// Walks `key` one dot-separated segment at a time.
    ///
    /// Returns `None` as soon as a segment is absent or the walk reaches a
    /// leaf early, and also when the final node is a branch.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = self;
        for segment in key.split('.') {
            match node {
                Node::Branch(children) => node = children.get(segment)?,
                Node::Leaf(_) => return None,
            }
        }
        match node {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    fn collect_keys(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            Node::Leaf(_) => out.push(prefix.to_string()),
            Node::Branch(children) => {
                for (key, child) in children {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    child.collect_keys(&path, out);
                }
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Object(_) => "an object",
    }
}

/// Immutable mapping from locale to its translation tree.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    trees: HashMap<Locale, Node>,
}

impl TranslationStore {
    /// Loads the translation files bundled into the binary.
    ///
    /// Every supported locale must ship a file.
    pub fn embedded() -> Result<Self> {
        let mut trees = HashMap::new();
        for locale in Locale::ALL {
            let filename = format!("{}.json", locale.code());
            let file = Asset::get(&filename)
                .ok_or_else(|| Error::Catalog(format!("missing embedded file {filename}")))?;
            let content = String::from_utf8_lossy(file.data.as_ref());
            let tree = Node::from_json(&content)
                .map_err(|e| Error::Catalog(format!("{filename}: {e}")))?;
            trees.insert(locale, tree);
        }
        tracing::debug!(locales = trees.len(), "loaded embedded translations");
        Ok(Self { trees })
    }

    pub fn from_json<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Locale, &'a str)>,
    {
        let mut trees = HashMap::new();
        for (locale, json) in sources {
            trees.insert(locale, Node::from_json(json)?);
        }
        Ok(Self { trees })
    }

    /// Loads `<dir>/<code>.json` for each supported locale.
    ///
    /// A locale without a file gets an empty tree; every lookup against it
    /// falls back to the raw key.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::Io(format!(
                "translation directory not found: {}",
                dir.display()
            )));
        }
        let mut trees = HashMap::new();
        for locale in Locale::ALL {
            let path = dir.join(format!("{}.json", locale.code()));
            if !path.exists() {
                tracing::warn!(locale = %locale, path = %path.display(), "no translation file");
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let tree = Node::from_json(&content)
                .map_err(|e| Error::Catalog(format!("{}: {e}", path.display())))?;
            trees.insert(locale, tree);
        }
        Ok(Self { trees })
    }

    /// Resolves `key` in the tree for `locale`. `None` means missing.
    pub fn resolve(&self, locale: Locale, key: &str) -> Option<&str> {
        self.trees.get(&locale)?.lookup(key)
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.resolve(locale, key).is_some()
    }

    /// Every dotted leaf path of `locale`, sorted.
    pub fn keys(&self, locale: Locale) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(tree) = self.trees.get(&locale) {
            tree.collect_keys("", &mut keys);
        }
        keys.sort_unstable();
        keys
    }

    /// Leaf paths of `reference` that do not resolve in `locale`, sorted.
    pub fn missing_keys(&self, locale: Locale, reference: Locale) -> Vec<String> {
        self.keys(reference)
            .into_iter()
            .filter(|key| !self.contains(locale, key))
            .collect()
    }

    /// Missing keys of each locale measured against the default locale.
    pub fn coverage(&self) -> CoverageReport {
        let reference = Locale::DEFAULT;
        let total = self.keys(reference).len();
        let locales = Locale::ALL
            .into_iter()
            .map(|locale| LocaleCoverage {
                locale,
                missing: self.missing_keys(locale, reference),
            })
            .collect();
        CoverageReport {
            reference,
            total,
            locales,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCoverage {
    pub locale: Locale,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub reference: Locale,
    /// Number of leaf keys in the reference locale.
    pub total: usize,
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|c| c.missing.is_empty())
    }
}
