//! API Module
//!
//! HTTP handlers and routing for the shout service.
//!
//! # Endpoints
//! - `POST /`, `POST /v1`, `POST /v1/` - Reverse and shout the `data` field
//! - `GET /health` - End-to-end probe through the upstream
//! - `GET /stats` - Cache statistics

mod extract;
pub mod handlers;
pub mod routes;

pub use extract::DataField;
pub use handlers::*;
pub use routes::create_router;
