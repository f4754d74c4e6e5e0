//! Error types for the capped set server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Set Error Enum ==
/// Unified error type for the capped set server.
///
/// A full-store insert whose value does not outrank the current minimum is
/// NOT represented here: that rejection is a defined outcome reported via
/// the operation's return value.
#[derive(Error, Debug)]
pub enum SetError {
    /// Key not present in the set
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Insert attempted for a key that is already present
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Structurally invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Disallowed value (zero is reserved as the absent sentinel)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for SetError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            SetError::UnknownKey(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            SetError::DuplicateKey(msg) => (StatusCode::CONFLICT, msg.clone()),
            SetError::InvalidKey(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            SetError::InvalidValue(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            SetError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the capped set server.
pub type Result<T> = std::result::Result<T, SetError>;
