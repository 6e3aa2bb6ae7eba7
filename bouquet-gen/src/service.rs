//! The composed request-for-name operation.
//!
//! `request_bouquet` is the single entry point the presentation layer
//! needs; it encapsulates cache check, allocation, render, and
//! commit-on-success:
//!
//! ```text
//! START -> CACHE_CHECK -> {hit: DONE} | {miss: SELECT -> RENDER}
//! RENDER -> {ok: COMMIT -> STORE -> DONE} | {fail: error, no commit, no store}
//! ```
//!
//! The service assumes at most one in-flight generation per instance; no
//! internal locking is performed. Independent instances over one store may
//! concurrently select the same identifier before either commits, which
//! only repeats a graphic and corrupts nothing.

use std::sync::Arc;

use bouquet_cache::{NormalizedName, ResultCache};
use bouquet_core::{Artifact, BouquetResult, PoolConfig};
use bouquet_pool::PoolAllocator;
use bouquet_storage::StateStore;

use crate::render::BouquetRenderer;

/// Result of a bouquet request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BouquetResponse {
    /// The rendered (or cached) artifact.
    pub artifact: Artifact,
    /// Whether the artifact came from the result cache.
    pub from_cache: bool,
}

/// Bouquet generation service.
///
/// Owns the allocator, the result cache, and the renderer; all persistent
/// state lives in the shared store passed at construction.
pub struct BouquetService<S: StateStore, R: BouquetRenderer> {
    allocator: PoolAllocator<S>,
    cache: ResultCache<S>,
    renderer: R,
}

impl<S: StateStore, R: BouquetRenderer> BouquetService<S, R> {
    /// Create a service over the given store and renderer.
    ///
    /// # Errors
    ///
    /// Returns a config error if the pool configuration is invalid.
    pub fn new(store: Arc<S>, renderer: R, config: &PoolConfig) -> BouquetResult<Self> {
        let allocator = PoolAllocator::new(Arc::clone(&store), config)?;
        let cache = ResultCache::new(store);
        Ok(Self {
            allocator,
            cache,
            renderer,
        })
    }

    /// The allocator backing this service.
    pub fn allocator(&self) -> &PoolAllocator<S> {
        &self.allocator
    }

    /// The result cache backing this service.
    pub fn cache(&self) -> &ResultCache<S> {
        &self.cache
    }

    /// Produce the bouquet artifact for a user-supplied name.
    ///
    /// A cached artifact for the (normalized) name is returned without
    /// touching the allocator. Otherwise an unused identifier is selected,
    /// rendered, and only on render success committed to the ledger and
    /// stored in the cache. A render failure ends the flow with no retry,
    /// no commit, and no cache entry, so the identifier stays available.
    pub async fn request_bouquet(&self, raw_name: &str) -> BouquetResult<BouquetResponse> {
        let name = NormalizedName::parse(raw_name)?;

        if let Some(artifact) = self.cache.get(&name) {
            tracing::debug!(name = name.display(), "Returning cached bouquet");
            return Ok(BouquetResponse {
                artifact,
                from_cache: true,
            });
        }

        let id = self.allocator.pick_one();
        tracing::info!(id = %id, name = name.display(), "Assigned pool identifier");

        let artifact = self.renderer.render(id, name.display()).await?;

        // Commit happens-after successful render, never at selection time.
        self.allocator.confirm_used(id);
        self.cache.put(&name, &artifact);

        Ok(BouquetResponse {
            artifact,
            from_cache: false,
        })
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Per-name greeting shown alongside a finished bouquet.
pub fn greeting(display_name: &str) -> String {
    format!("Happy Valentine's Day, {}!", display_name)
}

/// Sanitized file name for exporting a bouquet as a still image.
///
/// Runs of non-alphanumeric characters collapse to a single underscore.
pub fn download_file_name(display_name: &str) -> String {
    let mut safe = String::with_capacity(display_name.len());
    let mut last_was_separator = false;

    for c in display_name.chars() {
        if c.is_ascii_alphanumeric() {
            safe.push(c);
            last_was_separator = false;
        } else if !last_was_separator {
            safe.push('_');
            last_was_separator = true;
        }
    }

    format!("Valentines_Flower_{}.png", safe)
}
