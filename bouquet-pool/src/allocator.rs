//! Pool allocator: availability computation and random selection.
//!
//! The allocator never mutates the ledger during selection. Callers follow
//! select-before-commit: pick an identifier, consume it (render), and call
//! [`PoolAllocator::confirm_used`] only after the consumption succeeded. An
//! abandoned selection leaves the identifier available for future picks.

use std::sync::Arc;

use bouquet_core::{universe, BouquetResult, PoolConfig, PoolId};
use bouquet_storage::StateStore;

use crate::ledger::UsedLedger;

/// Computes the available identifier set and selects one uniformly at
/// random.
pub struct PoolAllocator<S: StateStore> {
    ledger: UsedLedger<S>,
    total: u32,
}

impl<S: StateStore> PoolAllocator<S> {
    /// Create an allocator over the given store.
    ///
    /// # Errors
    ///
    /// Returns a config error if the universe size is zero.
    pub fn new(store: Arc<S>, config: &PoolConfig) -> BouquetResult<Self> {
        config.validate()?;
        Ok(Self {
            ledger: UsedLedger::new(store),
            total: config.total,
        })
    }

    /// The ledger backing this allocator.
    pub fn ledger(&self) -> &UsedLedger<S> {
        &self.ledger
    }

    /// Universe size.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Identifiers not currently marked used, in universe order.
    ///
    /// An exhausted pool triggers an automatic, silent reset: the ledger is
    /// cleared and the full universe is returned. Exhaustion is never
    /// surfaced as an error.
    pub fn available_ids(&self) -> Vec<PoolId> {
        let used = self.ledger.load_used();
        let available: Vec<PoolId> = universe(self.total)
            .filter(|id| !used.contains(id))
            .collect();

        if available.is_empty() {
            tracing::info!(total = self.total, "Pool exhausted, resetting used set");
            self.ledger.reset();
            return universe(self.total).collect();
        }

        available
    }

    /// Select one identifier uniformly at random from the available set.
    ///
    /// Selection does not mutate the ledger; call [`confirm_used`] once the
    /// identifier has actually been consumed.
    ///
    /// [`confirm_used`]: PoolAllocator::confirm_used
    pub fn pick_one(&self) -> PoolId {
        use rand::Rng;

        let available = self.available_ids();
        let mut rng = rand::thread_rng();
        let idx = rng.gen_range(0..available.len());
        available[idx]
    }

    /// Commit a selected identifier as used.
    ///
    /// Call only after the identifier has been successfully and durably
    /// consumed, so a failed consumption does not burn pool inventory.
    pub fn confirm_used(&self, id: PoolId) {
        self.ledger.mark_used(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouquet_storage::MemoryStore;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn allocator(total: u32) -> PoolAllocator<MemoryStore> {
        PoolAllocator::new(Arc::new(MemoryStore::new()), &PoolConfig::new(total)).unwrap()
    }

    #[test]
    fn test_zero_universe_is_config_error() {
        let result = PoolAllocator::new(Arc::new(MemoryStore::new()), &PoolConfig::new(0));
        assert!(result.is_err());
    }

    #[test]
    fn test_available_ids_full_universe_when_unused() {
        let allocator = allocator(3);
        assert_eq!(
            allocator.available_ids(),
            vec![PoolId::new(1), PoolId::new(2), PoolId::new(3)]
        );
    }

    #[test]
    fn test_available_ids_excludes_used_in_universe_order() {
        let allocator = allocator(4);
        allocator.confirm_used(PoolId::new(3));
        allocator.confirm_used(PoolId::new(1));

        assert_eq!(
            allocator.available_ids(),
            vec![PoolId::new(2), PoolId::new(4)]
        );
    }

    #[test]
    fn test_exhaustion_triggers_reset() {
        let allocator = allocator(2);
        allocator.confirm_used(PoolId::new(1));
        allocator.confirm_used(PoolId::new(2));

        let available = allocator.available_ids();
        assert_eq!(available, vec![PoolId::new(1), PoolId::new(2)]);
        assert!(allocator.ledger().load_used().is_empty());
    }

    #[test]
    fn test_pick_one_does_not_mutate_ledger() {
        let allocator = allocator(5);
        let _ = allocator.pick_one();
        assert!(allocator.ledger().load_used().is_empty());
    }

    #[test]
    fn test_pick_one_returns_available_identifier() {
        let allocator = allocator(5);
        allocator.confirm_used(PoolId::new(2));
        allocator.confirm_used(PoolId::new(4));

        for _ in 0..50 {
            let id = allocator.pick_one();
            assert!(!allocator.ledger().is_used(id));
        }
    }

    #[test]
    fn test_single_identifier_universe_dispenses_forever() {
        let allocator = allocator(1);
        for _ in 0..5 {
            let id = allocator.pick_one();
            assert_eq!(id, PoolId::new(1));
            allocator.confirm_used(id);
        }
    }

    #[test]
    fn test_sequential_confirms_are_pairwise_distinct_until_exhaustion() {
        let total = 6;
        let allocator = allocator(total);
        let mut dispensed = BTreeSet::new();

        for _ in 0..total {
            let id = allocator.pick_one();
            allocator.confirm_used(id);
            assert!(dispensed.insert(id), "identifier dispensed twice");
        }
        assert_eq!(dispensed.len(), total as usize);

        // One past exhaustion: the reset makes everything fair game again.
        let id = allocator.pick_one();
        assert!(dispensed.contains(&id));
    }

    proptest! {
        #[test]
        fn prop_full_cycle_dispenses_a_permutation(total in 1u32..12) {
            let allocator = allocator(total);
            let mut dispensed = BTreeSet::new();

            for _ in 0..total {
                let id = allocator.pick_one();
                allocator.confirm_used(id);
                dispensed.insert(id);
            }

            let expected: BTreeSet<PoolId> = universe(total).collect();
            prop_assert_eq!(dispensed, expected);
        }
    }
}
