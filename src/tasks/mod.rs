//! Background Tasks Module
//!
//! # Tasks
//! - Expiry sweep: drops memoized outputs whose lifetime ran out

mod cleanup;

pub use cleanup::spawn_cleanup_task;
