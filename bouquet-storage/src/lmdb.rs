//! LMDB-backed state store.
//!
//! Uses the heed crate (Rust bindings for LMDB) as the durable substrate
//! for sessions that must survive a restart. One unnamed database holds
//! both the ledger record and all cache entries.
//!
//! # Thread Safety
//!
//! LMDB provides ACID transactions. The store uses read transactions for
//! `read` and a committed write transaction per `write`, so a successful
//! `write` is durable on return.

use std::path::Path;

use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions};

use bouquet_core::{BouquetError, BouquetResult, StorageError};

use crate::StateStore;

/// Error type for LMDB state store operations.
#[derive(Debug, thiserror::Error)]
pub enum LmdbStateError {
    /// Failed to open or create the LMDB environment.
    #[error("Failed to open LMDB environment: {0}")]
    EnvOpen(String),

    /// Failed to open the database within the environment.
    #[error("Failed to open database: {0}")]
    DbOpen(String),

    /// Transaction error.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LmdbStateError> for BouquetError {
    fn from(e: LmdbStateError) -> Self {
        BouquetError::Storage(StorageError::Unavailable {
            reason: e.to_string(),
        })
    }
}

/// LMDB-backed key-value store.
pub struct LmdbStateStore {
    /// The LMDB environment.
    env: Env,
    /// The main database (single unnamed database).
    db: Database<Str, Bytes>,
}

impl LmdbStateStore {
    /// Create a new LMDB state store.
    ///
    /// # Arguments
    ///
    /// * `path` - Directory where LMDB files will be stored
    /// * `max_size_mb` - Maximum size of the database in megabytes
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the LMDB
    /// environment cannot be opened, or the database cannot be created.
    pub fn new<P: AsRef<Path>>(path: P, max_size_mb: usize) -> Result<Self, LmdbStateError> {
        std::fs::create_dir_all(&path)?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(max_size_mb * 1024 * 1024)
                .max_dbs(1)
                .open(path.as_ref())
        }
        .map_err(|e| LmdbStateError::EnvOpen(e.to_string()))?;

        let mut wtxn = env
            .write_txn()
            .map_err(|e| LmdbStateError::Transaction(e.to_string()))?;

        let db: Database<Str, Bytes> = env
            .create_database(&mut wtxn, None)
            .map_err(|e| LmdbStateError::DbOpen(e.to_string()))?;

        wtxn.commit()
            .map_err(|e| LmdbStateError::Transaction(e.to_string()))?;

        Ok(Self { env, db })
    }
}

impl StateStore for LmdbStateStore {
    fn read(&self, key: &str) -> BouquetResult<Option<Vec<u8>>> {
        let rtxn = self.env.read_txn().map_err(|e| StorageError::ReadFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        let value = self
            .db
            .get(&rtxn, key)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })?
            .map(|bytes| bytes.to_vec());

        Ok(value)
    }

    fn write(&self, key: &str, value: &[u8]) -> BouquetResult<()> {
        let mut wtxn = self.env.write_txn().map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        self.db
            .put(&mut wtxn, key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        wtxn.commit().map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LmdbStateStore::new(dir.path(), 10).unwrap();

        store.write("used_pool_ids", b"[1,2]").unwrap();
        assert_eq!(
            store.read("used_pool_ids").unwrap(),
            Some(b"[1,2]".to_vec())
        );
    }

    #[test]
    fn test_read_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = LmdbStateStore::new(dir.path(), 10).unwrap();
        assert_eq!(store.read("missing").unwrap(), None);
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = LmdbStateStore::new(dir.path(), 10).unwrap();
            store.write("k", b"persisted").unwrap();
        }
        let store = LmdbStateStore::new(dir.path(), 10).unwrap();
        assert_eq!(store.read("k").unwrap(), Some(b"persisted".to_vec()));
    }
}
