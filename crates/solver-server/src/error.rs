use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use connect_core::BoardError;

/// Request failures, all surfaced as 400 with an `{"error": ...}` body.
/// The core never recovers internally; any invariant violation aborts the
/// request here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::debug!(error = %message, "rejecting request");
        (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
    }
}
