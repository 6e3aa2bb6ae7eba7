//! Renderer seam between the allocator core and the presentation layer.
//!
//! Rendering is modeled as an explicit asynchronous operation returning a
//! completion result, preserving suspend-until-loaded semantics: the flow
//! awaits the renderer and only commits pool inventory after it succeeds.
//! A render that never completes simply never reaches commit, leaving the
//! selected identifier available.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use bouquet_core::{Artifact, BouquetResult, PoolConfig, PoolId, RenderError};

/// Composer seam: turns a selected pool identifier into a finished
/// artifact for a display name.
#[async_trait]
pub trait BouquetRenderer: Send + Sync {
    /// Render the graphic for `id` into a finished artifact.
    ///
    /// May suspend while external resources load. Failures surface as
    /// render errors and must not mutate any allocator state.
    async fn render(&self, id: PoolId, display_name: &str) -> BouquetResult<Artifact>;
}

/// Renderer that loads the identifier's asset file from disk.
///
/// The asset for identifier `n` is `<asset_dir>/<n>.<extension>`. A missing
/// file maps to [`RenderError::AssetMissing`], the no-retry error path the
/// caller reports in place.
pub struct AssetRenderer {
    asset_dir: PathBuf,
    asset_extension: String,
}

impl AssetRenderer {
    /// Create a renderer for the configured asset pool.
    pub fn new(config: &PoolConfig) -> Self {
        Self {
            asset_dir: config.asset_dir.clone(),
            asset_extension: config.asset_extension.clone(),
        }
    }
}

#[async_trait]
impl BouquetRenderer for AssetRenderer {
    async fn render(&self, id: PoolId, _display_name: &str) -> BouquetResult<Artifact> {
        let asset = id.asset_name(&self.asset_extension);
        let path = self.asset_dir.join(&asset);

        let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RenderError::AssetMissing { asset: asset.clone() },
            _ => RenderError::Failed {
                asset: asset.clone(),
                reason: e.to_string(),
            },
        })?;

        Ok(Artifact::new(bytes))
    }
}

/// Deterministic renderer for tests.
///
/// Produces a payload derived from the identifier and display name, records
/// every identifier it was asked to render, and can be switched into a
/// failing mode. Clones share state, so a test can keep a handle while the
/// service owns the renderer.
#[derive(Debug, Clone, Default)]
pub struct StubRenderer {
    fail: Arc<AtomicBool>,
    rendered: Arc<Mutex<Vec<PoolId>>>,
}

impl StubRenderer {
    /// Create a healthy stub renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent renders fail (or succeed again).
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Identifiers render was called with, in order.
    pub fn rendered(&self) -> Vec<PoolId> {
        self.rendered.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl BouquetRenderer for StubRenderer {
    async fn render(&self, id: PoolId, display_name: &str) -> BouquetResult<Artifact> {
        if let Ok(mut rendered) = self.rendered.lock() {
            rendered.push(id);
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(RenderError::AssetMissing {
                asset: id.asset_name("gif"),
            }
            .into());
        }

        Ok(Artifact::new(
            format!("bouquet:{}:{}", id, display_name).into_bytes(),
        ))
    }
}
