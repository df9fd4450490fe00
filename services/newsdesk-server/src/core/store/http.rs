//! HTTP client for the headless CMS content API.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::payload::{normalize_all, search_fields, ListResponse};
use super::ContentStore;
use crate::core::config::{ContentStoreConfig, SourceConfig};
use crate::core::error::{NewsdeskError, Result};
use crate::core::types::Document;

/// Content store backed by the CMS REST API.
///
/// Issues `GET {base_url}/api/{collection}` with one
/// `where[or][i][field][like]` clause per searchable field.
pub struct HttpContentStore {
    client: reqwest::Client,
    base_url: Url,
    fetch_limit: usize,
}

impl HttpContentStore {
    /// Build a store from configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError`: invalid base URL or HTTP client setup failure
    pub fn new(config: &ContentStoreConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            NewsdeskError::ConfigError(format!(
                "Invalid content store URL '{}': {e}",
                config.base_url
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NewsdeskError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            fetch_limit: config.fetch_limit,
        })
    }

    /// Endpoint URL of a collection
    pub fn collection_url(&self, collection: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                NewsdeskError::ConfigError(format!(
                    "Content store URL cannot be a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", collection]);
        Ok(url)
    }

    /// Query parameters for a loose substring search
    pub fn query_params(&self, source: &SourceConfig, term: &str) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = search_fields(source.domain)
            .iter()
            .enumerate()
            .map(|(i, field)| (format!("where[or][{i}][{field}][like]"), term.to_string()))
            .collect();

        params.push(("limit".to_string(), self.fetch_limit.to_string()));
        params.push(("depth".to_string(), "1".to_string()));
        params
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn fetch(&self, source: &SourceConfig, term: &str) -> Result<Vec<Document>> {
        let url = self.collection_url(&source.collection)?;
        let fetch_error = |message: String| NewsdeskError::UpstreamFetch {
            collection: source.collection.clone(),
            message,
        };

        tracing::debug!(collection = %source.collection, url = %url, "fetching candidates");

        let response = self
            .client
            .get(url)
            .query(&self.query_params(source, term))
            .send()
            .await
            .map_err(|e| fetch_error(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_error(format!("response read failed: {e}")))?;

        let list: ListResponse =
            serde_json::from_slice(&bytes).map_err(|e| NewsdeskError::UpstreamParse {
                collection: source.collection.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            collection = %source.collection,
            returned = list.docs.len(),
            total_docs = ?list.total_docs,
            has_next_page = ?list.has_next_page,
            "content store responded"
        );

        Ok(normalize_all(list.docs, source))
    }
}
