//! Request logging middleware for the Newsdesk API

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Log each request with its path, query string, status and latency.
///
/// Health probes go to DEBUG. Otherwise 5xx responses log at ERROR,
/// 4xx at WARN and everything else at INFO.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if path == "/health" {
        debug!(status, elapsed_ms, "health probe");
    } else if response.status().is_server_error() {
        error!(%method, %path, %query, status, elapsed_ms, "request failed");
    } else if response.status().is_client_error() {
        warn!(%method, %path, %query, status, elapsed_ms, "request rejected");
    } else {
        info!(%method, %path, %query, status, elapsed_ms, "request served");
    }

    response
}
