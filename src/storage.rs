// SPDX-License-Identifier: MPL-2.0
//! Durable string-keyed preference slots.
//!
//! The session only ever touches one slot ([`LOCALE_KEY`]), but stores are
//! plain key/value so the same file can carry other preferences later.
//! Every backend is best-effort from the session's point of view: errors are
//! returned here and swallowed (and logged) by the caller.
//!
//! # Backends
//!
//! - [`FileStore`] - flat TOML table in `<data-dir>/preferences.toml`
//! - [`MemoryStore`] - in-process map, lost on drop
//! - [`Unavailable`] - no storage in this context; every call fails

use crate::config::PREFERENCES_FILE;
use crate::error::{Error, Result};
use crate::paths;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

pub use crate::config::LOCALE_KEY;

pub trait PreferenceStore {
    /// Reads a slot. `Ok(None)` means the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a slot, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose slot `key` already holds `value`.
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that does not exist in the current context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unavailable;

impl PreferenceStore for Unavailable {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::StorageUnavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::StorageUnavailable)
    }
}

/// Preference slots persisted as a flat TOML table.
///
/// A missing file reads as empty. A corrupt file fails on read and is
/// replaced wholesale by the next write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    /// Store in the resolved data directory (see [`paths::get_app_data_dir`]).
    pub fn new() -> Self {
        Self::with_override(None)
    }

    /// Store in `base_dir` if given, otherwise the resolved data directory.
    pub fn with_override(base_dir: Option<PathBuf>) -> Self {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(PREFERENCES_FILE);
            path
        });
        Self { path }
    }

    /// Store backed by exactly `path`.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn require_path(&self) -> Result<&Path> {
        self.path.as_deref().ok_or(Error::StorageUnavailable)
    }

    fn read_slots(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Storage(format!("{}: {e}", path.display())))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.require_path()?;
        Ok(Self::read_slots(path)?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.require_path()?;
        let mut slots = Self::read_slots(path).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "discarding unreadable preferences file");
            BTreeMap::new()
        });
        slots.insert(key.to_string(), value.to_string());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&slots)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(LOCALE_KEY), Ok(None));
        store.set(LOCALE_KEY, "en-US").expect("set");
        assert_eq!(store.get(LOCALE_KEY), Ok(Some("en-US".to_string())));
    }

    #[test]
    fn memory_store_last_write_wins() {
        let mut store = MemoryStore::with(LOCALE_KEY, "pt-BR");
        store.set(LOCALE_KEY, "es-ES").expect("set");
        assert_eq!(store.get(LOCALE_KEY), Ok(Some("es-ES".to_string())));
    }

    #[test]
    fn unavailable_store_fails_both_ways() {
        let mut store = Unavailable;
        assert_eq!(store.get(LOCALE_KEY), Err(Error::StorageUnavailable));
        assert_eq!(store.set(LOCALE_KEY, "en-US"), Err(Error::StorageUnavailable));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
    }

    #[test]
    fn file_store_missing_file_reads_empty() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FileStore::with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(store.get(LOCALE_KEY), Ok(None));
    }

    #[test]
    fn file_store_round_trip_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");
        let mut store = FileStore::with_override(Some(nested.clone()));

        store.set(LOCALE_KEY, "es-ES").expect("set");
        assert!(nested.join(PREFERENCES_FILE).exists());

        let reopened = FileStore::with_override(Some(nested));
        assert_eq!(reopened.get(LOCALE_KEY), Ok(Some("es-ES".to_string())));
    }

    #[test]
    fn file_store_keeps_other_slots() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = FileStore::with_override(Some(temp_dir.path().to_path_buf()));
        store.set("theme", "dark").expect("set theme");
        store.set(LOCALE_KEY, "en-US").expect("set locale");

        assert_eq!(store.get("theme"), Ok(Some("dark".to_string())));
        assert_eq!(store.get(LOCALE_KEY), Ok(Some("en-US".to_string())));
    }

    #[test]
    fn file_store_corrupt_file_errors_on_read_and_is_replaced_on_write() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "locale = [not toml").expect("write");

        let mut store = FileStore::at_path(&path);
        assert!(matches!(store.get(LOCALE_KEY), Err(Error::Storage(_))));

        store.set(LOCALE_KEY, "pt-BR").expect("set");
        assert_eq!(store.get(LOCALE_KEY), Ok(Some("pt-BR".to_string())));
    }

    #[test]
    fn file_store_without_path_is_unavailable() {
        let mut store = FileStore { path: None };
        assert_eq!(store.get(LOCALE_KEY), Err(Error::StorageUnavailable));
        assert_eq!(store.set(LOCALE_KEY, "en-US"), Err(Error::StorageUnavailable));
    }
}
