//! Custom Axum extractors for the course search API.
//!
//! - [`SearchParams`] - Typed `/api/search` query parameters

pub mod search_params;

pub use search_params::SearchParams;
