//! JSON error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use kata_extract::TextInputError;
use tracing::warn;

/// An error returned to HTTP clients as `{error, message, timestamp}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
            message: message.into(),
        }
    }
}

impl From<TextInputError> for ApiError {
    fn from(e: TextInputError) -> Self {
        Self::bad_request("Invalid input", e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("{} ({}): {}", self.error, self.status.as_u16(), self.message);
        let body = serde_json::json!({
            "error": self.error,
            "message": self.message,
            "timestamp": Utc::now().to_rfc3339(),
        });
        (self.status, Json(body)).into_response()
    }
}
