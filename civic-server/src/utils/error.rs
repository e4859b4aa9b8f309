//! Unified error handling
//!
//! Application error type and the JSON error body it renders to:
//! - [`AppError`] - application error enum
//! - [`ErrorResponse`] - error body `{code, message}`
//!
//! # Error code convention
//!
//! | Code | Meaning |
//! |------|---------|
//! | E0002 | Validation failed |
//! | E0003 | Resource not found |
//! | E0005 | Status outside the enumeration |
//! | E8001 | Upstream inference call failed |
//! | E9001 | Internal error |
//! | E9002 | Database error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use crate::db::repository::RepoError;

/// JSON error body
///
/// ```json
/// {
///   "code": "E0003",
///   "message": "Complaint complaint:abc not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("Validation failed: {0}")]
    /// Missing or malformed input (400)
    Validation(String),

    #[error("Invalid status: {0}")]
    /// Status value outside the enumeration (400)
    InvalidStatus(String),

    #[error("Resource not found: {0}")]
    /// Unknown identifier (404)
    NotFound(String),

    // ========== Server errors (5xx) ==========
    #[error("Database error: {0}")]
    /// Persistence layer unreachable or failed (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// Anything else that went wrong on our side (500)
    Internal(String),

    #[error("Upstream error {0}: {1}")]
    /// External inference call failed; upstream status is relayed
    Upstream(StatusCode, String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.clone()),
            AppError::InvalidStatus(msg) => (StatusCode::BAD_REQUEST, "E0005", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.clone()),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9002",
                    "Database error".to_string(),
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                )
            }

            AppError::Upstream(status, msg) => {
                warn!(target: "llm", status = %status, error = %msg, "Upstream call failed");
                (*status, "E8001", msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            code: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

// ========== Helper constructors ==========

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid-status error
    pub fn invalid_status(msg: impl Into<String>) -> Self {
        Self::InvalidStatus(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status this error renders with
    pub fn http_status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(status, _) => *status,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for handlers and services
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            AppError::validation("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::invalid_status("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::database("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Upstream(StatusCode::SERVICE_UNAVAILABLE, "down".into()).http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_repo_error_conversion_preserves_not_found() {
        let err: AppError = RepoError::NotFound("Complaint x not found".into()).into();
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err: AppError = RepoError::Database("io".into()).into();
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
