//! Error types for the climate API.
//!
//! This module defines a single error enum covering every failure the
//! service can run into, from startup (configuration, opening the store)
//! to per-request failures (malformed dates).

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for climate API operations.
#[derive(Error, Debug)]
pub enum ClimateError {
    /// Backing store errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A date path parameter that is not `YYYY-MM-DD`
    #[error("Invalid date for {param}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { param: String, value: String },

    /// Stored rows that cannot be turned into typed records
    #[error("Data load error: {message}")]
    DataLoad { message: String },

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl ClimateError {
    /// HTTP status used when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClimateError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience type alias for Results with ClimateError
pub type Result<T> = std::result::Result<T, ClimateError>;
