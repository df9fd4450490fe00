//! HTTP mapping of core errors.
//!
//! Every error body has the shape
//! `{ "message": <summary>, "error": <detail>, "status": <code> }`.
//! Handler panics are rendered the same way as `Unexpected`.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::NewsdeskError;

impl NewsdeskError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            NewsdeskError::Validation(_) => StatusCode::BAD_REQUEST,
            NewsdeskError::UpstreamFetch { .. } | NewsdeskError::UpstreamParse { .. } => {
                StatusCode::BAD_GATEWAY
            }
            NewsdeskError::Unexpected(_)
            | NewsdeskError::ConfigError(_)
            | NewsdeskError::IoError(_)
            | NewsdeskError::SerdeError(_)
            | NewsdeskError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short summary shown as `message`
    fn summary(&self) -> &'static str {
        match self {
            NewsdeskError::Validation(_) => "Invalid search request",
            NewsdeskError::UpstreamFetch { .. } | NewsdeskError::UpstreamParse { .. } => {
                "Content store unavailable"
            }
            _ => "Error performing search",
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for NewsdeskError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "message": self.summary(),
            "error": self.message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

/// Panic handler for `CatchPanicLayer`
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    NewsdeskError::Unexpected(detail).into_response()
}
