//! JSON key-value file storage.
//!
//! A thin layer over a single JSON object file: opaque get/set/remove of
//! string-keyed values. Writes are atomic (temp file in the same
//! directory, fsync, rename) so a crash never leaves a half-written
//! namespace behind.

use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use redaai_core::RedaaiError;

/// Errors that can occur during key-value store operations.
#[derive(Debug)]
pub enum KvStoreError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parse or serialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for KvStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KvStoreError::IoError(e) => write!(f, "I/O error: {}", e),
            KvStoreError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for KvStoreError {}

impl From<std::io::Error> for KvStoreError {
    fn from(e: std::io::Error) -> Self {
        KvStoreError::IoError(e)
    }
}

impl From<serde_json::Error> for KvStoreError {
    fn from(e: serde_json::Error) -> Self {
        KvStoreError::JsonError(e)
    }
}

impl From<KvStoreError> for RedaaiError {
    fn from(e: KvStoreError) -> Self {
        match e {
            KvStoreError::IoError(io) => RedaaiError::io(io.to_string()),
            KvStoreError::JsonError(json) => RedaaiError::serialization("JSON", json.to_string()),
        }
    }
}

/// A string-keyed JSON object file.
///
/// A missing or empty file reads as an empty namespace. Each namespace
/// (session, preferences) gets its own file.
pub struct JsonKvStore {
    path: PathBuf,
}

impl JsonKvStore {
    /// Creates a store handle for the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<Value>, KvStoreError> {
        Ok(self.load()?.get(key).cloned())
    }

    /// Reads a string value stored under `key`.
    ///
    /// A value of another JSON type reads as `None`.
    pub fn get_string(&self, key: &str) -> Result<Option<String>, KvStoreError> {
        Ok(self
            .get(key)?
            .and_then(|v| v.as_str().map(|s| s.to_string())))
    }

    /// Reads a boolean value stored under `key`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, KvStoreError> {
        Ok(self.get(key)?.and_then(|v| v.as_bool()))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: Value) -> Result<(), KvStoreError> {
        let mut map = self.load()?;
        map.insert(key.to_string(), value);
        self.save(&map)
    }

    /// Removes `key`. Returns whether a value was present.
    pub fn remove(&self, key: &str) -> Result<bool, KvStoreError> {
        let mut map = self.load()?;
        let removed = map.remove(key).is_some();
        if removed {
            self.save(&map)?;
        }
        Ok(removed)
    }

    fn load(&self) -> Result<Map<String, Value>, KvStoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, map: &Map<String, Value>) -> Result<(), KvStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Temp file in the same directory so the rename stays on one
        // filesystem.
        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(map)?;

        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonKvStore {
        JsonKvStore::new(dir.path().join("ns.json"))
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("authToken").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set("authToken", json!("fake-token")).unwrap();
        assert_eq!(
            store.get_string("authToken").unwrap(),
            Some("fake-token".to_string())
        );
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set("authToken", json!("old")).unwrap();
        store.set("authToken", json!("new")).unwrap();
        assert_eq!(store.get_string("authToken").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set("authToken", json!("token")).unwrap();
        assert!(store.remove("authToken").unwrap());
        assert_eq!(store.get("authToken").unwrap(), None);
        assert!(!store.remove("authToken").unwrap());
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set("authToken", json!("token")).unwrap();
        store.set("isDark", json!(true)).unwrap();
        store.remove("authToken").unwrap();

        assert_eq!(store.get_bool("isDark").unwrap(), Some(true));
    }

    #[test]
    fn test_wrong_type_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set("isDark", json!(true)).unwrap();
        assert_eq!(store.get_string("isDark").unwrap(), None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ns.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonKvStore::new(path);
        let result = store.get("authToken");
        assert!(matches!(result, Err(KvStoreError::JsonError(_))));
    }

    #[test]
    fn test_values_survive_new_handle() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).set("authToken", json!("persisted")).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(
            reopened.get_string("authToken").unwrap(),
            Some("persisted".to_string())
        );
    }
}
