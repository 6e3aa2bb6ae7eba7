//! Configuration types

use crate::{BouquetResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default universe size when none is configured.
pub const DEFAULT_POOL_TOTAL: u32 = 10;

/// Pool configuration.
///
/// `total` defines the closed identifier range `{1 .. total}`, each mapped
/// to an asset file `<n>.<asset_extension>` under `asset_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Universe size (number of available graphics).
    pub total: u32,
    /// Directory holding the asset files.
    pub asset_dir: PathBuf,
    /// File extension of the asset files, without the dot.
    pub asset_extension: String,
}

impl PoolConfig {
    /// Create a config with the given universe size and conventional defaults.
    pub fn new(total: u32) -> Self {
        Self {
            total,
            asset_dir: PathBuf::from("assets"),
            asset_extension: "gif".to_string(),
        }
    }

    /// Set the asset directory.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Set the asset file extension.
    pub fn with_asset_extension(mut self, ext: impl Into<String>) -> Self {
        self.asset_extension = ext.into();
        self
    }

    /// Create from environment variables with fallback to defaults.
    ///
    /// Environment variables:
    /// - `BOUQUET_POOL_TOTAL`: universe size (default: 10)
    /// - `BOUQUET_ASSET_DIR`: asset directory (default: "assets")
    /// - `BOUQUET_ASSET_EXTENSION`: asset extension (default: "gif")
    pub fn from_env() -> Self {
        let defaults = Self::new(DEFAULT_POOL_TOTAL);

        Self {
            total: std::env::var("BOUQUET_POOL_TOTAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.total),
            asset_dir: std::env::var("BOUQUET_ASSET_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_dir),
            asset_extension: std::env::var("BOUQUET_ASSET_EXTENSION")
                .ok()
                .unwrap_or(defaults.asset_extension),
        }
    }

    /// Validate the configuration.
    ///
    /// A universe size of zero is a configuration error: the allocator must
    /// fail loudly at startup rather than loop or dispense an undefined
    /// identifier.
    pub fn validate(&self) -> BouquetResult<()> {
        if self.total == 0 {
            return Err(ConfigError::InvalidValue {
                field: "total".to_string(),
                value: self.total.to_string(),
                reason: "total must be at least 1".to_string(),
            }
            .into());
        }

        if self.asset_extension.is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "asset_extension".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
