//! Error types for pmdash
//!
//! One error enum serves both the store layer and the HTTP handlers.
//! Precondition failures (duplicate unique field, dangling reference)
//! map to 400 so the caller can see which input was rejected; missing
//! records map to 404; everything else is a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Requested record does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique-field collision, e.g. employee email or per-project KPI (400)
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// A supplied reference does not resolve to an existing record (400)
    #[error("Referenced entity not found: {0}")]
    MissingReference(String),

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization error at the store boundary
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal invariant violation
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            Error::Duplicate(msg) => (StatusCode::BAD_REQUEST, "DUPLICATE", msg),
            Error::MissingReference(msg) => {
                (StatusCode::BAD_REQUEST, "MISSING_REFERENCE", msg)
            }
            Error::Database(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                err.to_string(),
            ),
            Error::Serialization(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERIALIZATION_ERROR",
                err.to_string(),
            ),
            Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
