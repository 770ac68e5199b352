//! Query DSL generation for the Elasticsearch store.

pub mod query_builder;

pub use query_builder::{EsQuery, EsQueryBuilder};
