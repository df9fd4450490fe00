//! HTTP request handlers for the Newsdesk API
//!
//! Implements the health check and the search endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};

use crate::core::error::NewsdeskError;
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Search handler
///
/// `GET /api/search?query=&page=&pageSize=&sortBy=&searchType=&dateFrom=&dateTo=&author=&category=`
///
/// Content store outages do not fail the request; the affected
/// sources simply contribute no results.
///
/// # Errors
///
/// - `Validation` (400): missing or blank query, malformed query
///   string, unparseable date filter
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, NewsdeskError> {
    let Query(params) = params.map_err(|e| NewsdeskError::Validation(e.body_text()))?;

    let request = SearchRequest::from_params(params, &services.config.search)?;
    let response = services.search.search(request).await?;

    Ok(Json(response))
}
