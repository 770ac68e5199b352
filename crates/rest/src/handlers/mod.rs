//! HTTP request handlers.
//!
//! - [`search`] - Course search
//! - [`health`] - Health, liveness and readiness endpoints

pub mod health;
pub mod search;

pub use health::{health_handler, liveness_handler, readiness_handler};
pub use search::search_handler;
