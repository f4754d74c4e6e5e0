//! Request and Response models for the capped set server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{InsertRequest, UpdateRequest};
pub use responses::{
    ErrorResponse, HealthResponse, LowestResponse, StatsResponse, ValueResponse,
};
