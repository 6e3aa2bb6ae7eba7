//! Bouquet Pool - Allocation Ledger and Pool Allocator
//!
//! Guarantees that each identifier in a bounded universe is handed out
//! without repetition until the pool is exhausted, then recycles the pool
//! wholesale. The ledger persists the used set across sessions through the
//! shared [`bouquet_storage::StateStore`]; the allocator computes
//! availability from it and performs uniform random selection.

pub mod allocator;
pub mod ledger;

pub use allocator::PoolAllocator;
pub use ledger::UsedLedger;
