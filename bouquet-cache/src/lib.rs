//! Bouquet Cache - Per-Name Result Cache
//!
//! Maps a normalized request key to a previously rendered artifact over the
//! shared [`bouquet_storage::StateStore`]. Consulted before allocation so a
//! repeat request for the same name is idempotent and never re-consumes
//! pool inventory.

pub mod cache;
pub mod normalize;

pub use cache::ResultCache;
pub use normalize::NormalizedName;
