//! Rendered artifact payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A finished bouquet artifact: an opaque rendered bitmap payload plus the
/// time it was produced.
///
/// The payload carries no reference back to the pool identifier that
/// produced it; once rendered, the association is implicit in the bytes.
/// A cached artifact therefore stays valid even after its source pool is
/// later reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Serialized bitmap payload.
    pub payload: Vec<u8>,
    /// When the artifact was rendered.
    pub rendered_at: DateTime<Utc>,
}

impl Artifact {
    /// Wrap a freshly rendered payload, stamped with the current time.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            rendered_at: Utc::now(),
        }
    }

    /// Reconstruct an artifact with a known render time (used when decoding
    /// a persisted cache entry).
    pub fn with_rendered_at(payload: Vec<u8>, rendered_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            rendered_at,
        }
    }
}
