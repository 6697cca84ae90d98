//! Error types for car-events
//!
//! Defines module-specific error types using thiserror for clear error
//! propagation. "Not found" is deliberately absent from this enum: missing
//! cars are reported as empty results (`Option::None`), not errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Main error type for car-events
#[derive(Debug, Error)]
pub enum Error {
    /// Store connectivity or query errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration or startup errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience Result type using car-events Error
pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            ),
            Error::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
