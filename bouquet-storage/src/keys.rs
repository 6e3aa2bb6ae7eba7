//! Persistent key layout.
//!
//! Two logical records share the store: the used-identifier ledger and the
//! per-name cache entries.

/// Key holding the serialized set of used pool identifiers.
pub const USED_POOL_IDS: &str = "used_pool_ids";

/// Prefix for per-name cache entries.
pub const CACHE_PREFIX: &str = "cache_";

/// Full storage key for the cache entry of a normalized request key.
pub fn cache_entry(normalized_key: &str) -> String {
    format!("{}{}", CACHE_PREFIX, normalized_key)
}
