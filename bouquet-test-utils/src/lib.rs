//! Bouquet Test Utilities
//!
//! Centralized test infrastructure for the bouquet workspace:
//! - A failure-injecting state store double
//! - Proptest generators for request names
//! - Re-exports of the in-memory store and core types for convenience

// Re-export the in-memory store from its source crate
pub use bouquet_storage::MemoryStore;

// Re-export core types for convenience
pub use bouquet_core::{
    universe, Artifact, BouquetError, BouquetResult, ConfigError, PoolConfig, PoolId,
    RenderError, RequestError, StorageError,
};

use std::sync::atomic::{AtomicBool, Ordering};

use bouquet_storage::StateStore;

// ============================================================================
// FAILURE-INJECTING STORE
// ============================================================================

/// State store double whose reads and writes can be made to fail on demand.
///
/// Successful operations delegate to an inner [`MemoryStore`], so a test
/// can interleave healthy and failing phases and assert what was durably
/// written in each.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingStore {
    /// Create a healthy store; nothing fails until toggled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent reads fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl StateStore for FailingStore {
    fn read(&self, key: &str) -> BouquetResult<Option<Vec<u8>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::ReadFailed {
                key: key.to_string(),
                reason: "injected read failure".to_string(),
            }
            .into());
        }
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &[u8]) -> BouquetResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "injected write failure".to_string(),
            }
            .into());
        }
        self.inner.write(key, value)
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

/// Strategy producing plausible request names, including surrounding
/// whitespace and mixed casing.
pub fn name_strategy() -> proptest::strategy::BoxedStrategy<String> {
    use proptest::prelude::*;

    proptest::string::string_regex("[ ]{0,2}[A-Za-z][A-Za-z]{0,11}[ ]{0,2}")
        .expect("valid regex")
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_failing_store_delegates_when_healthy() {
        let store = FailingStore::new();
        store.write("k", b"v").unwrap();
        assert_eq!(store.read("k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn test_failing_store_injects_failures() {
        let store = FailingStore::new();
        store.set_fail_reads(true);
        store.set_fail_writes(true);

        assert!(store.read("k").is_err());
        assert!(store.write("k", b"v").is_err());

        store.set_fail_reads(false);
        store.set_fail_writes(false);
        assert!(store.write("k", b"v").is_ok());
    }

    proptest! {
        #[test]
        fn prop_generated_names_are_nonempty_after_trim(name in name_strategy()) {
            prop_assert!(!name.trim().is_empty());
        }
    }
}
