//! API Routes
//!
//! Configures the Axum router with all capped set server endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, insert_handler, remove_handler, stats_handler, update_handler, value_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /insert` - Add an entry, evicting the lowest if full
/// - `PUT /update` - Replace the value of an existing entry
/// - `DELETE /remove/:key` - Remove an entry
/// - `GET /value/:key` - Look up a value (0 when absent)
/// - `GET /stats` - Get operation statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/insert", post(insert_handler))
        .route("/update", put(update_handler))
        .route("/remove/:key", delete(remove_handler))
        .route("/value/:key", get(value_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
