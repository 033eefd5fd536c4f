//! Gateway error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::OrderError;
use thiserror::Error;

/// Gateway-level error type that maps to HTTP responses.
///
/// Notification failures never surface here; only malformed events do.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The event payload could not be turned into an order snapshot.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "rejected order event");
                StatusCode::BAD_REQUEST
            }
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<OrderError> for GatewayError {
    fn from(err: OrderError) -> Self {
        GatewayError::BadRequest(err.to_string())
    }
}
