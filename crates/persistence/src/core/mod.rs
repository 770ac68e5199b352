//! Core storage traits and abstractions.
//!
//! - [`DocumentStore`] - Existence check, bulk upsert, and query execution
//! - [`BackendKind`] - Identifies a backend implementation

pub mod backend;
pub mod storage;

pub use backend::BackendKind;
pub use storage::DocumentStore;
