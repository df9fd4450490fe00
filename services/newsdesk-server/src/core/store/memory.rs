//! In-memory content store.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::ContentStore;
use crate::core::config::SourceConfig;
use crate::core::error::{NewsdeskError, Result};
use crate::core::types::{Document, DocumentFields};

/// Fixed snapshot of documents keyed by collection.
///
/// Applies the same loose substring predicate as the CMS: a document
/// is a candidate when its title, quote, author, categories, tags or
/// body text contain the term. Articles served from an opinion source
/// come back as opinion pieces. Collections can be marked as failing
/// to exercise degraded fetches.
#[derive(Default)]
pub struct MemoryContentStore {
    collections: HashMap<String, Vec<Document>>,
    failing: HashSet<String>,
    fetches: AtomicUsize,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection snapshot
    pub fn with_collection(mut self, collection: &str, docs: Vec<Document>) -> Self {
        self.collections.insert(collection.to_string(), docs);
        self
    }

    /// Make every fetch of `collection` fail with `UpstreamFetch`
    pub fn with_failing(mut self, collection: &str) -> Self {
        self.failing.insert(collection.to_string());
        self
    }

    /// Number of fetches served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

fn loosely_matches(doc: &Document, term: &str) -> bool {
    let needle = term.to_lowercase();
    let mut fields: Vec<String> = vec![
        doc.title.clone(),
        doc.quote.clone(),
        doc.author.clone(),
        doc.body.plain_text(),
    ];
    if let Some(editorial) = doc.editorial() {
        fields.push(editorial.primary_category.clone());
        fields.push(editorial.secondary_category.clone());
        fields.extend(editorial.tags.iter().cloned());
    }
    if let Some(link) = doc.external() {
        fields.push(link.category.clone());
    }

    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

fn as_opinion(mut doc: Document) -> Document {
    if let DocumentFields::Article(editorial) = doc.fields {
        doc.fields = DocumentFields::Opinion(editorial);
    }
    doc
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn fetch(&self, source: &SourceConfig, term: &str) -> Result<Vec<Document>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(&source.collection) {
            return Err(NewsdeskError::UpstreamFetch {
                collection: source.collection.clone(),
                message: "HTTP 503 Service Unavailable".to_string(),
            });
        }

        Ok(self
            .collections
            .get(&source.collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| loosely_matches(d, term))
                    .cloned()
                    .map(|d| if source.opinion { as_opinion(d) } else { d })
                    .collect()
            })
            .unwrap_or_default())
    }
}
