//! Allocation ledger: the persisted set of dispensed-and-confirmed
//! identifiers.
//!
//! The ledger is deliberately fail-open. A read failure or a malformed
//! persisted value behaves as an empty used set, and a write failure is
//! swallowed after logging: the generator staying available matters more
//! than perfect non-repetition. Storage errors stay internal `Result`s and
//! convert to fallback values here, never crossing into allocator logic.

use std::collections::BTreeSet;
use std::sync::Arc;

use bouquet_core::{BouquetResult, PoolId, StorageError};
use bouquet_storage::{keys, StateStore};

/// Persisted record of which pool identifiers have been dispensed.
///
/// Every operation reads the store at call time; there is no in-memory
/// copy across calls, so a concurrent external mutation (another process
/// over the same store) is observed on the next read.
pub struct UsedLedger<S: StateStore> {
    store: Arc<S>,
}

impl<S: StateStore> UsedLedger<S> {
    /// Create a ledger over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The current used set, read from persistent storage.
    ///
    /// Read failures and corrupted payloads yield the empty set.
    pub fn load_used(&self) -> BTreeSet<PoolId> {
        match self.try_load() {
            Ok(used) => used,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load used set, treating as empty");
                BTreeSet::new()
            }
        }
    }

    /// Whether `id` is currently marked used.
    pub fn is_used(&self, id: PoolId) -> bool {
        self.load_used().contains(&id)
    }

    /// Mark `id` used and persist the updated set immediately.
    ///
    /// Idempotent: marking an already-used identifier does not rewrite the
    /// set. A persistence failure is swallowed; whatever was last durably
    /// written remains authoritative after a restart.
    pub fn mark_used(&self, id: PoolId) {
        let mut used = self.load_used();
        if !used.insert(id) {
            return;
        }
        self.persist(&used);
    }

    /// Clear the used set entirely and persist the empty set.
    pub fn reset(&self) {
        self.persist(&BTreeSet::new());
    }

    fn try_load(&self) -> BouquetResult<BTreeSet<PoolId>> {
        let bytes = match self.store.read(keys::USED_POOL_IDS)? {
            Some(bytes) => bytes,
            None => return Ok(BTreeSet::new()),
        };

        let ids: Vec<PoolId> =
            serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupted {
                key: keys::USED_POOL_IDS.to_string(),
                reason: e.to_string(),
            })?;

        Ok(ids.into_iter().collect())
    }

    fn persist(&self, used: &BTreeSet<PoolId>) {
        let ids: Vec<PoolId> = used.iter().copied().collect();
        let bytes = match serde_json::to_vec(&ids) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize used set");
                return;
            }
        };

        if let Err(e) = self.store.write(keys::USED_POOL_IDS, &bytes) {
            tracing::warn!(error = %e, "Failed to persist used set");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouquet_storage::MemoryStore;
    use bouquet_test_utils::FailingStore;

    fn ledger() -> (Arc<MemoryStore>, UsedLedger<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let ledger = UsedLedger::new(Arc::clone(&store));
        (store, ledger)
    }

    #[test]
    fn test_starts_empty() {
        let (_, ledger) = ledger();
        assert!(ledger.load_used().is_empty());
        assert!(!ledger.is_used(PoolId::new(1)));
    }

    #[test]
    fn test_mark_used_persists_immediately() {
        let (store, ledger) = ledger();
        ledger.mark_used(PoolId::new(2));

        assert!(ledger.is_used(PoolId::new(2)));
        let raw = store.read(keys::USED_POOL_IDS).unwrap().unwrap();
        assert_eq!(raw, b"[2]".to_vec());
    }

    #[test]
    fn test_mark_used_is_idempotent() {
        let (store, ledger) = ledger();
        ledger.mark_used(PoolId::new(3));
        ledger.mark_used(PoolId::new(3));

        assert_eq!(ledger.load_used().len(), 1);
        let raw = store.read(keys::USED_POOL_IDS).unwrap().unwrap();
        assert_eq!(raw, b"[3]".to_vec());
    }

    #[test]
    fn test_reset_clears_used_set() {
        let (store, ledger) = ledger();
        ledger.mark_used(PoolId::new(1));
        ledger.mark_used(PoolId::new(2));

        ledger.reset();

        assert!(ledger.load_used().is_empty());
        let raw = store.read(keys::USED_POOL_IDS).unwrap().unwrap();
        assert_eq!(raw, b"[]".to_vec());
    }

    #[test]
    fn test_corrupted_payload_reads_as_empty() {
        let (store, ledger) = ledger();
        store.write(keys::USED_POOL_IDS, b"not json").unwrap();

        assert!(ledger.load_used().is_empty());
    }

    #[test]
    fn test_read_failure_reads_as_empty() {
        let store = Arc::new(FailingStore::new());
        let ledger = UsedLedger::new(Arc::clone(&store));
        store.set_fail_reads(true);

        assert!(ledger.load_used().is_empty());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let store = Arc::new(FailingStore::new());
        let ledger = UsedLedger::new(Arc::clone(&store));
        store.set_fail_writes(true);

        // Must not panic or propagate; the next read re-derives from
        // whatever was last durably written (nothing).
        ledger.mark_used(PoolId::new(5));
        store.set_fail_writes(false);
        assert!(!ledger.is_used(PoolId::new(5)));
    }

    #[test]
    fn test_external_mutation_observed_on_next_read() {
        let (store, ledger) = ledger();
        // Another process writes directly to the shared store.
        store.write(keys::USED_POOL_IDS, b"[7]").unwrap();

        assert!(ledger.is_used(PoolId::new(7)));
    }
}
