//! API Module
//!
//! HTTP handlers and routing for the capped set server REST API.
//!
//! # Endpoints
//! - `POST /insert` - Add an entry, evicting the lowest if full
//! - `PUT /update` - Replace the value of an existing entry
//! - `DELETE /remove/:key` - Remove an entry
//! - `GET /value/:key` - Look up a value (0 when absent)
//! - `GET /stats` - Get operation statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
