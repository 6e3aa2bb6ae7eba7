//! In-memory state store.
//!
//! The default store for tests and ephemeral sessions. Cloning shares the
//! underlying map, so a cloned handle observes writes made through the
//! original.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bouquet_core::{BouquetResult, StorageError};

use crate::StateStore;

/// Thread-safe in-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> BouquetResult<Option<Vec<u8>>> {
        let entries = self.entries.read().map_err(|_| StorageError::Unavailable {
            reason: "lock poisoned".to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> BouquetResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Unavailable {
            reason: "lock poisoned".to_string(),
        })?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
