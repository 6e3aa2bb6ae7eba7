//! Bouquet Gen - Generation Service and Renderer Seam
//!
//! Composes the pool allocator and the result cache behind a single entry
//! point, [`BouquetService::request_bouquet`], and defines the renderer
//! seam the presentation layer plugs into.

pub mod render;
pub mod service;

pub use render::{AssetRenderer, BouquetRenderer, StubRenderer};
pub use service::{download_file_name, greeting, BouquetResponse, BouquetService};
