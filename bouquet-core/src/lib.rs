//! Bouquet Core - Data Types and Error Taxonomy
//!
//! Core types shared across the bouquet workspace: the pool identifier
//! universe, the rendered artifact payload, configuration, and the error
//! taxonomy. No storage or allocation logic lives here; this is the leaf
//! crate every other member depends on.

pub mod artifact;
pub mod config;
pub mod error;
pub mod pool;

pub use artifact::Artifact;
pub use config::{PoolConfig, DEFAULT_POOL_TOTAL};
pub use error::{
    BouquetError, BouquetResult, ConfigError, RenderError, RequestError, StorageError,
};
pub use pool::{universe, PoolId};
