//! Wordbook Core Library
//!
//! Paginated "book" view over word-pronunciation study data:
//! - Content extraction (structured records or classified content blocks)
//! - Spread layout (word grid padded to a fixed capacity, memo, photo, page numbers)
//! - Navigation (debounced index changes, boundary clamping, input dispatch)
//!
//! This library is host-independent: presentation goes through the
//! [`Surfaces`] trait, and the host drives the debounce clock.

pub mod config;
pub mod error;
pub mod services;
pub mod source;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{BookConfig, CoverPolicy};
pub use error::{CoreError, CoreResult};
pub use services::{BookController, Extractor, MarkupSurfaces, Renderer};
pub use source::{load_source, ContentSource};
pub use traits::{SurfaceId, SurfaceUpdate, Surfaces};
