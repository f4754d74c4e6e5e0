//! Request DTOs for the capped set server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the INSERT operation (POST /insert)
///
/// # Fields
/// - `key`: The key to add to the set
/// - `value`: The value to store (strictly positive)
#[derive(Debug, Clone, Deserialize)]
pub struct InsertRequest {
    /// The key to insert
    pub key: String,
    /// The value to store
    pub value: u64,
}

impl InsertRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    /// Business rules (zero value, duplicate keys) are enforced by the store.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Request body for the UPDATE operation (PUT /update)
///
/// # Fields
/// - `key`: The key whose value is replaced
/// - `value`: The new value (strictly positive)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    /// The key to update
    pub key: String,
    /// The replacement value
    pub value: u64,
}

impl UpdateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Structural key validation shared by both mutating requests.
fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > 256 {
        return Some("Key exceeds maximum length of 256 characters".to_string());
    }
    None
}
