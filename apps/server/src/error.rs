//! API error type bridging core errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use garden_core::errors::Error;
use serde_json::json;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper turning `garden_core::Error` into an HTTP response.
///
/// Validation failures are the caller's to fix (400), missing records are
/// 404, everything else is a 500 whose details stay in the server log.
pub struct ApiError(Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            e if e.is_not_found() => (StatusCode::NOT_FOUND, e.to_string()),
            other => {
                tracing::error!("request failed: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError(Error::Unexpected(err.to_string()))
    }
}
