use std::path::Path;
use std::sync::Arc;

use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{FileStore, KeyValueStore, MemoryStore};

/// Typed access to the persisted namespaces.
///
/// Cheap to clone; all clones share the same underlying store.
#[derive(Clone)]
pub struct LocalStorage {
    store: Arc<dyn KeyValueStore>,
}

impl LocalStorage {
    /// Wrap an existing raw store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Storage backed by JSON files inside `dir`
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::new(Arc::new(FileStore::new(dir.as_ref())))
    }

    /// Storage that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Read and parse a JSON value, falling back to `default` on any failure.
    pub(crate) fn read_json<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default(),
            Err(e) => {
                error!("❌ Failed to load '{key}' from local storage: {e}");
                return default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("⚠️  Ignoring unreadable value under '{key}': {e}");
                default()
            }
        }
    }

    /// Serialize and store a JSON value; failures are logged, never returned.
    pub(crate) fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                error!("❌ Failed to serialize '{key}': {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(key, &raw) {
            error!("❌ Failed to save '{key}' to local storage: {e}");
        }
    }

    pub(crate) fn remove_key(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            error!("❌ Failed to remove '{key}' from local storage: {e}");
        }
    }
}
