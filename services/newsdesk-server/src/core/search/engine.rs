//! Search orchestration.
//!
//! Provides the SearchService, which validates a request, fans out to
//! every content source of the requested domain, and ranks the
//! combined candidates.

use std::sync::Arc;
use std::time::Instant;

use super::filter::apply_filters;
use super::matcher::matcher_for;
use super::paginator::paginate;
use super::scorer::score_with;
use super::sorter::sort_results;
use crate::core::config::{SearchConfig, SourceConfig};
use crate::core::error::{NewsdeskError, Result};
use crate::core::store::ContentStore;
use crate::core::types::{
    Document, FilterEcho, QueryEcho, ScoredDocument, SearchDomain, SearchRequest, SearchResponse,
};

/// Relevance search service
pub struct SearchService {
    store: Arc<dyn ContentStore>,
    sources: Vec<SourceConfig>,
    config: SearchConfig,
}

impl SearchService {
    /// Create a new search service
    pub fn new(store: Arc<dyn ContentStore>, sources: Vec<SourceConfig>, config: SearchConfig) -> Self {
        Self {
            store,
            sources,
            config,
        }
    }

    /// Validate a request and return its trimmed query.
    ///
    /// # Errors
    ///
    /// - `Validation`: query empty after trimming or too long
    pub fn validate(&self, request: &SearchRequest) -> Result<String> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(NewsdeskError::Validation(
                "Search query is required".to_string(),
            ));
        }

        let length = query.chars().count();
        if length > self.config.max_query_length {
            return Err(NewsdeskError::Validation(format!(
                "Query is {length} characters, maximum is {}",
                self.config.max_query_length
            )));
        }

        Ok(query.to_string())
    }

    /// Execute a search.
    ///
    /// Content store failures never fail the search: the affected
    /// source contributes no candidates.
    ///
    /// # Errors
    ///
    /// - `Validation`: see [`SearchService::validate`]. No fetch is
    ///   performed in that case.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();
        let query = self.validate(&request)?;

        let candidates = self.fetch_candidates(request.domain, &query).await;
        let fetched = candidates.len();

        let response = rank(candidates, &request, &query, self.config.preview_length);

        tracing::debug!(
            query = %query,
            domain = %request.domain,
            fetched,
            total = response.pagination.total,
            returned = response.results.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "search completed"
        );

        Ok(response)
    }

    /// Fetch every source of `domain` concurrently.
    ///
    /// Each failing source is logged and contributes nothing.
    /// Documents outside the domain are dropped.
    async fn fetch_candidates(&self, domain: SearchDomain, term: &str) -> Vec<Document> {
        let fetches = self
            .sources
            .iter()
            .filter(|source| source.domain == domain)
            .map(|source| async move { (source, self.store.fetch(source, term).await) });

        let outcomes = futures::future::join_all(fetches).await;

        let mut candidates = Vec::new();
        for (source, outcome) in outcomes {
            match outcome {
                Ok(docs) => {
                    tracing::debug!(collection = %source.collection, count = docs.len(), "source returned candidates");
                    candidates.extend(docs.into_iter().filter(|d| d.domain() == domain));
                }
                Err(err) => {
                    tracing::warn!(
                        collection = %source.collection,
                        error = %err,
                        "content source failed, continuing without it"
                    );
                }
            }
        }

        candidates
    }
}

/// Score, filter, sort and paginate a candidate set.
///
/// Pure: the same candidates and request always give the same
/// response. `query` must already be trimmed.
pub fn rank(
    candidates: Vec<Document>,
    request: &SearchRequest,
    query: &str,
    preview_length: usize,
) -> SearchResponse {
    let matcher = matcher_for(request.domain);
    let needle = query.to_lowercase();

    let scored: Vec<ScoredDocument> = candidates
        .into_iter()
        .map(|document| ScoredDocument {
            score: score_with(matcher, &document, &needle),
            preview: String::new(),
            document,
        })
        .collect();

    let mut filtered = apply_filters(scored, &request.filters, matcher);
    sort_results(&mut filtered, request.sort_by);

    let (mut results, pagination) = paginate(filtered, request.page, request.page_size);
    for result in &mut results {
        result.preview = result.document.body.preview(preview_length);
    }

    SearchResponse {
        results,
        pagination,
        query: QueryEcho {
            search_term: query.to_string(),
            search_type: request.domain,
            sort_by: request.sort_by,
            filters: FilterEcho::from(&request.filters),
        },
    }
}
