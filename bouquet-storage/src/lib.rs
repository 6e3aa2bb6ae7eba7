//! Bouquet Storage - State Store Trait and Backends
//!
//! Defines the persistent key-value substrate shared by the allocation
//! ledger and the result cache. Both components read and write the same
//! store through the [`StateStore`] seam, so tests can substitute an
//! in-memory double and assert persistence calls without a real backend.

pub mod keys;
pub mod lmdb;
pub mod memory;

pub use lmdb::{LmdbStateError, LmdbStateStore};
pub use memory::MemoryStore;

use bouquet_core::BouquetResult;

/// Persistent key-value store seam.
///
/// Implementations must be thread-safe. Reads and writes are synchronous
/// and durable on return: a successful `write` must survive a process
/// restart. Failures are reported as explicit errors; fail-open conversion
/// to fallback values is the caller's responsibility, not the store's.
pub trait StateStore: Send + Sync {
    /// Read the value under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> BouquetResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, overwriting any prior value.
    fn write(&self, key: &str, value: &[u8]) -> BouquetResult<()>;
}
