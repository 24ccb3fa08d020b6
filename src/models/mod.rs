//! Request and Response models for the shout API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{FormPayload, JsonPayload};
pub use responses::{ErrorResponse, StatsResponse, TransformResponse};
