//! API Handlers
//!
//! HTTP request handlers for each capped set server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{Result, SetError};
use crate::models::{
    HealthResponse, InsertRequest, LowestResponse, StatsResponse, UpdateRequest, ValueResponse,
};
use crate::set::CappedSet;

/// Application state shared across all handlers.
///
/// Contains the capped set wrapped in Arc<RwLock<>> — the single
/// mutual-exclusion boundary that serializes all mutations.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe capped set
    pub set: Arc<RwLock<CappedSet>>,
}

impl AppState {
    /// Creates a new AppState with the given capped set.
    pub fn new(set: CappedSet) -> Self {
        Self {
            set: Arc::new(RwLock::new(set)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes the capped set with the configured capacity.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let set = CappedSet::new(config.capacity);
        Self::new(set)
    }
}

/// Handler for POST /insert
///
/// Adds a new entry and returns the lowest entry after the operation.
/// A full-store insert below the current minimum returns the unchanged
/// minimum with status 200; the rejected key is simply not stored.
pub async fn insert_handler(
    State(state): State<AppState>,
    Json(req): Json<InsertRequest>,
) -> Result<Json<LowestResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(SetError::InvalidKey(error_msg));
    }

    // Acquire write lock and insert
    let mut set = state.set.write().await;
    let lowest = set.insert(req.key, req.value)?;

    Ok(Json(LowestResponse::new(lowest)))
}

/// Handler for PUT /update
///
/// Replaces the value of an existing entry in place and returns the lowest
/// entry after the operation.
pub async fn update_handler(
    State(state): State<AppState>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<LowestResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(SetError::InvalidKey(error_msg));
    }

    // Acquire write lock and update
    let mut set = state.set.write().await;
    let lowest = set.update(&req.key, req.value)?;

    Ok(Json(LowestResponse::new(lowest)))
}

/// Handler for DELETE /remove/:key
///
/// Deletes an entry and returns the lowest entry among those remaining.
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<LowestResponse>> {
    // Acquire write lock
    let mut set = state.set.write().await;
    let lowest = set.remove(&key)?;

    Ok(Json(LowestResponse::new(lowest)))
}

/// Handler for GET /value/:key
///
/// Returns the stored value for a key, or the sentinel 0 when absent.
/// Lookups never fail and take the shared read lock.
pub async fn value_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<ValueResponse> {
    let set = state.set.read().await;
    let value = set.get_value(&key);

    Json(ValueResponse::new(key, value))
}

/// Handler for GET /stats
///
/// Returns current operation statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let set = state.set.read().await;
    let stats = set.stats();

    Json(StatsResponse::new(
        stats.inserts,
        stats.rejections,
        stats.evictions,
        stats.updates,
        stats.removals,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_value_handler() {
        let state = AppState::new(CappedSet::new(5));

        // Insert an entry
        let req = InsertRequest {
            key: "node1".to_string(),
            value: 10,
        };
        let result = insert_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.lowest_key.as_deref(), Some("node1"));
        assert_eq!(response.lowest_value, 10);

        // Look it up
        let response = value_handler(State(state.clone()), Path("node1".to_string())).await;
        assert_eq!(response.value, 10);
    }

    #[tokio::test]
    async fn test_value_handler_absent_key() {
        let state = AppState::new(CappedSet::new(5));

        let response = value_handler(State(state), Path("nonexistent".to_string())).await;
        assert_eq!(response.value, 0);
    }

    #[tokio::test]
    async fn test_insert_duplicate_key() {
        let state = AppState::new(CappedSet::new(5));

        let req = InsertRequest {
            key: "node1".to_string(),
            value: 10,
        };
        insert_handler(State(state.clone()), Json(req.clone()))
            .await
            .unwrap();

        let result = insert_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(SetError::DuplicateKey(_))));
    }

    #[tokio::test]
    async fn test_update_handler() {
        let state = AppState::new(CappedSet::new(5));

        insert_handler(
            State(state.clone()),
            Json(InsertRequest {
                key: "node1".to_string(),
                value: 10,
            }),
        )
        .await
        .unwrap();

        let result = update_handler(
            State(state),
            Json(UpdateRequest {
                key: "node1".to_string(),
                value: 4,
            }),
        )
        .await
        .unwrap();

        assert_eq!(result.lowest_key.as_deref(), Some("node1"));
        assert_eq!(result.lowest_value, 4);
    }

    #[tokio::test]
    async fn test_update_handler_unknown_key() {
        let state = AppState::new(CappedSet::new(5));

        let result = update_handler(
            State(state),
            Json(UpdateRequest {
                key: "ghost".to_string(),
                value: 4,
            }),
        )
        .await;

        assert!(matches!(result, Err(SetError::UnknownKey(_))));
    }

    #[tokio::test]
    async fn test_remove_handler() {
        let state = AppState::new(CappedSet::new(5));

        insert_handler(
            State(state.clone()),
            Json(InsertRequest {
                key: "node1".to_string(),
                value: 10,
            }),
        )
        .await
        .unwrap();

        // Removing the only entry empties the set
        let result = remove_handler(State(state.clone()), Path("node1".to_string()))
            .await
            .unwrap();
        assert_eq!(result.lowest_key, None);
        assert_eq!(result.lowest_value, 0);

        // Verify it's gone
        let response = value_handler(State(state), Path("node1".to_string())).await;
        assert_eq!(response.value, 0);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::new(CappedSet::new(5));

        let response = stats_handler(State(state)).await;
        assert_eq!(response.inserts, 0);
        assert_eq!(response.rejections, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_insert_invalid_request() {
        let state = AppState::new(CappedSet::new(5));

        let req = InsertRequest {
            key: "".to_string(), // Empty key is invalid
            value: 1,
        };
        let result = insert_handler(State(state), Json(req)).await;
        assert!(result.is_err());
    }
}
