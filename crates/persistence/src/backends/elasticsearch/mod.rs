//! Elasticsearch document store.
//!
//! Each collection maps to one index named `{prefix}_{collection}` (or just
//! `{collection}` when the prefix is empty). Indices are created on first
//! upsert with an explicit mapping derived from
//! [`CourseField`](crate::types::CourseField):
//!
//! | Kind | Mapping |
//! |------|---------|
//! | Keyword | `keyword` |
//! | Text | `text` with the `standard` analyzer |
//! | Integer | `integer` |
//! | Double | `double` |
//! | Date | `date` |
//!
//! Criteria trees compile to Query DSL in [`search::query_builder`].
//!
//! # Example
//!
//! ```ignore
//! use course_persistence::backends::elasticsearch::{ElasticsearchBackend, ElasticsearchConfig};
//!
//! let config = ElasticsearchConfig {
//!     nodes: vec!["http://localhost:9200".to_string()],
//!     ..Default::default()
//! };
//! let backend = ElasticsearchBackend::new(config)?;
//! backend.health_check().await?;
//! ```

mod backend;
mod schema;
pub mod search;
mod store;

pub use backend::{ElasticsearchAuth, ElasticsearchBackend, ElasticsearchConfig};
pub use schema::create_index_mapping;
