//! Result cache: persisted mapping from normalized name to rendered
//! artifact.
//!
//! Entirely independent of the allocation ledger. A hit short-circuits
//! allocation; the cache never references which identifier produced an
//! entry, so a cached artifact stays valid across pool resets.
//!
//! Entry format: `[rendered_at millis: 8 bytes LE][payload]`.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use bouquet_core::{Artifact, BouquetResult, StorageError};
use bouquet_storage::{keys, StateStore};

use crate::normalize::NormalizedName;

/// Persisted per-name artifact cache.
///
/// Fail-open like the ledger: a read error or undecodable entry is an
/// ordinary miss, and a write failure is swallowed after logging (the
/// artifact stays usable for the in-memory session, it just won't survive
/// a restart).
pub struct ResultCache<S: StateStore> {
    store: Arc<S>,
}

impl<S: StateStore> ResultCache<S> {
    /// Create a cache over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Look up the cached artifact for a name.
    ///
    /// Pure lookup: does not mutate any allocator state. Returns `None` on
    /// a missing key or on any storage read error.
    pub fn get(&self, name: &NormalizedName) -> Option<Artifact> {
        match self.try_get(name) {
            Ok(artifact) => artifact,
            Err(e) => {
                tracing::warn!(error = %e, name = name.display(), "Cache read failed, treating as miss");
                None
            }
        }
    }

    /// Store the artifact for a name, overwriting any prior entry.
    pub fn put(&self, name: &NormalizedName, artifact: &Artifact) {
        let key = keys::cache_entry(name.key());
        let encoded = encode_entry(artifact);

        if let Err(e) = self.store.write(&key, &encoded) {
            tracing::warn!(error = %e, name = name.display(), "Cache write failed");
        }
    }

    fn try_get(&self, name: &NormalizedName) -> BouquetResult<Option<Artifact>> {
        let key = keys::cache_entry(name.key());
        let bytes = match self.store.read(&key)? {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        decode_entry(&bytes, &key).map(Some)
    }
}

/// Encode an artifact into the persisted entry framing.
fn encode_entry(artifact: &Artifact) -> Vec<u8> {
    let millis = artifact.rendered_at.timestamp_millis();
    let mut bytes = Vec::with_capacity(8 + artifact.payload.len());
    bytes.extend_from_slice(&millis.to_le_bytes());
    bytes.extend_from_slice(&artifact.payload);
    bytes
}

/// Decode a persisted entry back into an artifact.
fn decode_entry(bytes: &[u8], key: &str) -> BouquetResult<Artifact> {
    if bytes.len() < 8 {
        return Err(StorageError::Corrupted {
            key: key.to_string(),
            reason: "entry shorter than timestamp header".to_string(),
        }
        .into());
    }

    let millis_bytes: [u8; 8] = bytes[0..8].try_into().map_err(|_| StorageError::Corrupted {
        key: key.to_string(),
        reason: "invalid timestamp header".to_string(),
    })?;
    let millis = i64::from_le_bytes(millis_bytes);
    let rendered_at = DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now);

    Ok(Artifact::with_rendered_at(bytes[8..].to_vec(), rendered_at))
}
