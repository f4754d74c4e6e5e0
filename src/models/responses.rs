//! Response DTOs for the capped set server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::set::{Lowest, ABSENT_VALUE};

/// Response body for every mutating operation (insert, update, remove).
///
/// Carries the lowest entry after the mutation. An empty set is reported
/// with a null key and the absent-value sentinel, mirroring the lookup
/// convention.
#[derive(Debug, Clone, Serialize)]
pub struct LowestResponse {
    /// Key holding the smallest value, null when the set is empty
    pub lowest_key: Option<String>,
    /// The smallest stored value, 0 when the set is empty
    pub lowest_value: u64,
}

impl LowestResponse {
    /// Creates a new LowestResponse from a store result
    pub fn new(lowest: Option<Lowest>) -> Self {
        match lowest {
            Some(lowest) => Self {
                lowest_key: Some(lowest.key),
                lowest_value: lowest.value,
            },
            None => Self {
                lowest_key: None,
                lowest_value: ABSENT_VALUE,
            },
        }
    }
}

/// Response body for the value lookup (GET /value/:key)
///
/// Absent keys are reported with the sentinel value 0, never as an error.
#[derive(Debug, Clone, Serialize)]
pub struct ValueResponse {
    /// The requested key
    pub key: String,
    /// The stored value, or 0 if the key is not present
    pub value: u64,
}

impl ValueResponse {
    /// Creates a new ValueResponse
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of inserts that stored an entry
    pub inserts: u64,
    /// Number of full-store inserts rejected below the minimum
    pub rejections: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of in-place updates
    pub updates: u64,
    /// Number of explicit removals
    pub removals: u64,
    /// Current number of entries in the set
    pub total_entries: usize,
    /// Acceptance rate (inserts / (inserts + rejections))
    pub acceptance_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from set statistics
    pub fn new(
        inserts: u64,
        rejections: u64,
        evictions: u64,
        updates: u64,
        removals: u64,
        total_entries: usize,
    ) -> Self {
        let attempts = inserts + rejections;
        let acceptance_rate = if attempts > 0 {
            inserts as f64 / attempts as f64
        } else {
            0.0
        };
        Self {
            inserts,
            rejections,
            evictions,
            updates,
            removals,
            total_entries,
            acceptance_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
