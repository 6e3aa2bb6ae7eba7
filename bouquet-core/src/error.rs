//! Error types for bouquet operations

use thiserror::Error;

/// Storage layer errors.
///
/// These never cross into allocator logic: the ledger and the result cache
/// convert them to their documented fail-open fallback values (empty set,
/// absent entry) at their own boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Read failed for key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Write failed for key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Corrupted value under key {key}: {reason}")]
    Corrupted { key: String, reason: String },

    #[error("Storage backend unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Configuration errors. These are fatal at construction time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Render errors from the composer seam.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Missing asset file: {asset}")]
    AssetMissing { asset: String },

    #[error("Render failed for {asset}: {reason}")]
    Failed { asset: String, reason: String },
}

/// Request validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Name is empty after trimming")]
    EmptyName,
}

/// Master error type for all bouquet operations.
#[derive(Debug, Clone, Error)]
pub enum BouquetError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),
}

/// Result type alias for bouquet operations.
pub type BouquetResult<T> = Result<T, BouquetError>;

// =============================================================================
// TESTS
// =============================================================================
