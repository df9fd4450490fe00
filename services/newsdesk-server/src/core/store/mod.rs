//! Content store access.
//!
//! The engine reads candidates through the [`ContentStore`] trait.
//! [`HttpContentStore`] talks to the headless CMS; [`MemoryContentStore`]
//! serves fixed snapshots for tests, benches and embedding.
//!
//! Raw CMS payloads are normalized into [`Document`] values once, in
//! [`payload`], so scoring and filtering never deal with optional
//! chains or shape variations.

mod http;
mod memory;
pub mod payload;

use async_trait::async_trait;

use crate::core::config::SourceConfig;
use crate::core::error::Result;
use crate::core::types::Document;

pub use http::HttpContentStore;
pub use memory::MemoryContentStore;

/// Read access to one upstream collection at a time
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch documents of `source` loosely matching `term`.
    ///
    /// Implementations apply a substring predicate over the
    /// searchable fields of the source's domain. Returned documents
    /// are already tagged with their kind.
    ///
    /// # Errors
    ///
    /// - `UpstreamFetch`: store unreachable or non-OK status
    /// - `UpstreamParse`: malformed payload
    async fn fetch(&self, source: &SourceConfig, term: &str) -> Result<Vec<Document>>;
}
