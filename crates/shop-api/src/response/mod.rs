//! Response types and error handling for API endpoints
//!
//! Every failure surfaced by this API, including "resource not found",
//! renders as HTTP 400 with the fixed error envelope. The envelope always
//! carries a `timestamp`; the `code` field distinguishes causes for
//! clients that care.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shop_core::DomainError;
use shop_service::ServiceError;
use thiserror::Error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    ///
    /// Always `400 Bad Request`; the API does not distinguish 404/500 from
    /// other client-visible failures.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
        }
    }

    /// Create an invalid body error with a custom message
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }
}

/// Error envelope body
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub timestamp: DateTime<Utc>,
    pub code: String,
    pub message: String,
}

impl ErrorEnvelope {
    /// Build an envelope stamped with the current server time
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorEnvelope::new(self.error_code(), self.to_string());

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
