//! Document store implementations.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | always | Process-local store, evaluates criteria in-process |
//! | Elasticsearch | `elasticsearch` | External search cluster |
//!
//! # Example
//!
//! ```
//! use course_persistence::backends::memory::InMemoryStore;
//! use course_persistence::core::DocumentStore;
//!
//! let store = InMemoryStore::new();
//! assert_eq!(store.backend_name(), "memory");
//! ```

pub mod memory;

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;
