//! Local persistence layer.
//!
//! Everything the storefront remembers between launches lives in one
//! plugin-store file as a handful of optional keys. Writes are flushed to disk
//! on every call so the persisted state always matches the in-memory state
//! after a mutation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tauri_plugin_store::StoreExt;

use crate::error::AppError;

pub mod cart;
pub mod profile;
pub mod settings;

/// Plugin-store file holding all storefront keys.
pub const STORE_FILE: &str = "storefront.json";

/// Key-value persistence the stores write through.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value under `key`, or `None` if it was never written.
    fn read_value(&self, key: &str) -> Option<Value>;

    /// Replaces the value under `key` and flushes it.
    fn write_value(&self, key: &str, value: Value) -> crate::error::Result<()>;

    /// Reads a string blob. Non-string values count as absent.
    fn read_blob(&self, key: &str) -> Option<String> {
        match self.read_value(key)? {
            Value::String(blob) => Some(blob),
            _ => None,
        }
    }

    fn write_blob(&self, key: &str, blob: String) -> crate::error::Result<()> {
        self.write_value(key, Value::String(blob))
    }
}

impl<R: tauri::Runtime> KeyValueStore for tauri_plugin_store::Store<R> {
    fn read_value(&self, key: &str) -> Option<Value> {
        self.get(key)
    }

    fn write_value(&self, key: &str, value: Value) -> crate::error::Result<()> {
        self.set(key, value);
        self.save()?;
        Ok(())
    }
}

/// Opens the storefront store file through the plugin.
pub fn open<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> crate::error::Result<Arc<dyn KeyValueStore>> {
    let store = app.store(STORE_FILE)?;
    Ok(store)
}

/// Process-local store. Backs tests and sessions that must not touch disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read_value(&self, key: &str) -> Option<Value> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write_value(&self, key: &str, value: Value) -> crate::error::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AppError::Storage(format!("memory store poisoned: {}", e)))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrips_blobs() {
        let store = MemoryStore::new();
        assert!(store.read_blob("k").is_none());
        store.write_blob("k", "[1,2]".to_string()).unwrap();
        assert_eq!(store.read_blob("k").as_deref(), Some("[1,2]"));
    }

    #[test]
    fn non_string_value_is_not_a_blob() {
        let store = MemoryStore::new();
        store.write_value("k", serde_json::json!({"a": 1})).unwrap();
        assert!(store.read_blob("k").is_none());
        assert!(store.read_value("k").is_some());
    }

    #[test]
    fn write_overwrites_previous_value() {
        let store = MemoryStore::new();
        store.write_blob("k", "old".to_string()).unwrap();
        store.write_blob("k", "new".to_string()).unwrap();
        assert_eq!(store.read_blob("k").as_deref(), Some("new"));
    }
}
