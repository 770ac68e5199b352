//! Response bodies for the course search API.
//!
//! - [`search_results`] - The `/api/search` result page

pub mod search_results;

pub use search_results::{CourseSummary, SearchResponse};
