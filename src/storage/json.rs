//! JSON file-backed key/value store.
//!
//! Values are kept in memory and the whole map is rewritten on every change,
//! using write-to-temp + rename so the file is never left half written.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "updated_at": 1760870400,
//!   "values": {
//!     "lang": "es",
//!     "rating": "pg"
//!   }
//! }
//! ```

use crate::domain::error::{ExplorerError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Unix timestamp of the last successful write.
    #[serde(default)]
    updated_at: i64,

    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            updated_at: 0,
            values: BTreeMap::new(),
        }
    }
}

/// JSON file key/value store.
///
/// # Examples
///
/// ```no_run
/// use gif_explorer::storage::{JsonStore, KeyValueStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonStore::open(PathBuf::from("/tmp/gif-explorer/preferences.json"))?;
/// store.set_many(&[("rating", "g"), ("lang", "en")])?;
/// # Ok::<(), gif_explorer::ExplorerError>(())
/// ```
pub struct JsonStore {
    file_path: PathBuf,
    data: StoreData,
}

impl JsonStore {
    /// Opens the store at `file_path`, loading existing values if the file exists.
    ///
    /// Parent directories are created on demand.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, or the file
    /// exists but cannot be read or parsed.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference store");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            StoreData::default()
        };

        Ok(Self { file_path, data })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| ExplorerError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version != FORMAT_VERSION {
            tracing::warn!(version = data.version, "unknown preference file version, reading anyway");
        }

        tracing::debug!(keys = data.values.len(), "loaded preference store");
        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        self.data.updated_at = chrono::Utc::now().timestamp();

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ExplorerError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "preference store saved");
        Ok(())
    }

    /// Applies `entries` in memory and writes once, rolling memory back on failure.
    fn write_entries(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        let previous = self.data.values.clone();
        for (key, value) in entries {
            self.data.values.insert((*key).to_string(), (*value).to_string());
        }

        if previous == self.data.values {
            return Ok(());
        }

        if let Err(e) = self.save_to_file() {
            self.data.values = previous;
            return Err(e);
        }
        Ok(())
    }
}

impl KeyValueStore for JsonStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key).entered();
        self.write_entries(&[(key, value)])
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set_many", count = entries.len()).entered();
        self.write_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        {
            let mut store = JsonStore::open(path.clone()).unwrap();
            store.set("rating", "pg-13").unwrap();
            store.set_many(&[("lang", "fr"), ("rating", "r")]).unwrap();
        }

        let store = JsonStore::open(path).unwrap();
        assert_eq!(store.get("rating").unwrap().as_deref(), Some("r"));
        assert_eq!(store.get("lang").unwrap().as_deref(), Some("fr"));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");

        let mut store = JsonStore::open(path.clone()).unwrap();
        store.set("lang", "de").unwrap();

        assert_eq!(store.path(), path.as_path());
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn file_has_versioned_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = JsonStore::open(path.clone()).unwrap();
        store.set("rating", "g").unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["values"]["rating"], "g");
        assert!(raw["updated_at"].as_i64().unwrap() > 0);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let result = JsonStore::open(path);
        assert!(matches!(result, Err(ExplorerError::Storage(_))));
    }
}
