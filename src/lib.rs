//! Reverse Shout - a memoizing proxy for a text-shouting API
//!
//! Reverses inbound text, sends it to the upstream shout endpoint and keeps
//! the answers in a bounded LRU cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ServiceError};
pub use tasks::spawn_cleanup_task;
