//! Pool identifier type and universe helpers.
//!
//! Identifiers form a fixed, finite, ordered universe `{1 .. total}` sized
//! at startup. They are never created or destroyed at runtime; only their
//! "used" status changes, and that status lives in the ledger, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of the fixed resource universe available for dispensation.
///
/// Identifiers are opaque, stable tokens. Each maps to a conventional
/// external asset name `<n>.<extension>` via [`PoolId::asset_name`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PoolId(u32);

impl PoolId {
    /// Wrap a raw identifier value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw identifier value.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Conventional asset file name for this identifier, e.g. `"3.gif"`.
    pub fn asset_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Iterate the full identifier universe `{1 .. total}` in universe order.
pub fn universe(total: u32) -> impl Iterator<Item = PoolId> {
    (1..=total).map(PoolId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_order_and_bounds() {
        let ids: Vec<PoolId> = universe(3).collect();
        assert_eq!(
            ids,
            vec![PoolId::new(1), PoolId::new(2), PoolId::new(3)]
        );
    }

    #[test]
    fn test_universe_empty_for_zero() {
        assert_eq!(universe(0).count(), 0);
    }

    #[test]
    fn test_asset_name() {
        assert_eq!(PoolId::new(7).asset_name("gif"), "7.gif");
    }

    #[test]
    fn test_serde_transparent() {
        let id = PoolId::new(4);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "4");
        let back: PoolId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
