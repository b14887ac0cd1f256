//! Error types for the review API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Application error type surfaced by request handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// Request failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The completion service failed; detail stays server-side
    #[error("Upstream completion failure")]
    Upstream,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    fn message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            // Upstream detail is logged server-side, never returned to the client
            Self::Upstream => "Failed to generate code review".to_string(),
        }
    }
}

impl From<nitpick_core::Error> for AppError {
    fn from(err: nitpick_core::Error) -> Self {
        match err {
            nitpick_core::Error::Validation(msg) => AppError::Validation(msg),
            other => {
                tracing::error!(error = %other, "Review request failed");
                AppError::Upstream
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short client-facing message
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.message(),
        });
        (status, body).into_response()
    }
}

/// Result type alias for request handlers
pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("missing code".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_message_is_generic() {
        let err: AppError = nitpick_core::Error::Completion("key leaked? no".to_string()).into();
        assert_eq!(err.message(), "Failed to generate code review");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err: AppError =
            nitpick_core::Error::Validation("Code and language are required".to_string()).into();
        assert_eq!(err.message(), "Code and language are required");
    }
}
