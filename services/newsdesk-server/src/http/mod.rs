//! HTTP REST adapter
//!
//! Depends only on core/.
//!
//! Exposes the search engine and a health check via the Axum web
//! framework.

pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::core::services::Services;

/// Build the application router.
///
/// Non-GET requests to these routes are answered with
/// 405 Method Not Allowed by Axum's method router. A panicking handler
/// yields a 500 with the usual error body.
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_handler))
        .route("/api/search", get(search_handler))
        // Add middleware
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(services)
}
