//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce `{"error": "..."}` bodies with
//! the matching HTTP status code.

use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_core::ValidationError;
use todo_storage::StorageError;

use crate::schema::common::ErrorBody;

/// Message used when a storage failure carries no text of its own.
pub const DB_FAILURE: &str = "DB failure";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Rejected input (400). The message is the validator's fixed text.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed todo does not exist (404).
    #[error("Not found")]
    NotFound,

    /// The storage backend failed (500).
    #[error("{}", .0.as_deref().unwrap_or(DB_FAILURE))]
    Persistence(Option<String>),

    /// Request body exceeded the configured size limit (413).
    #[error("Payload too large")]
    PayloadTooLarge,

    /// No route for this method and path (405).
    #[error("Not Found")]
    RouteNotMatched,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::RouteNotMatched => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Persistence(_) => tracing::warn!(error = %self, "storage failure"),
            ApiError::Validation(_) => tracing::debug!(error = %self, "rejected request"),
            ApiError::NotFound | ApiError::PayloadTooLarge | ApiError::RouteNotMatched => {}
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        let message = err.to_string();
        ApiError::Persistence((!message.is_empty()).then_some(message))
    }
}

// A path segment that is not valid UTF-8 after percent-decoding can never
// be an id.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::Validation(ValidationError::InvalidId)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Validation(ValidationError::InvalidJson)
        }
    }
}
