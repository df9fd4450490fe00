//! Unified service container for Newsdesk
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::SearchService;
use crate::core::store::{ContentStore, HttpContentStore};
use std::sync::Arc;

/// Unified services container
///
/// Handlers share one instance behind an `Arc`.
#[derive(Clone)]
pub struct Services {
    /// Relevance search over the content store
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services backed by the configured CMS
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(HttpContentStore::new(&config.content_store)?);
        Ok(Self::with_store(config, store))
    }

    /// Create services over an explicit content store
    pub fn with_store(config: Config, store: Arc<dyn ContentStore>) -> Self {
        let search = Arc::new(SearchService::new(
            store,
            config.content_store.sources.clone(),
            config.search.clone(),
        ));

        Self {
            search,
            config: Arc::new(config),
        }
    }
}
