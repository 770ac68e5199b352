//! Course Search Persistence Layer
//!
//! This crate turns structured course search requests into store queries and
//! runs them against a document store. It also owns the startup ingestion
//! step that seeds an empty store with the sample catalog.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! course-persistence = { version = "0.1", features = ["elasticsearch"] }
//! ```
//!
//! - in-memory (always available) - process-local store for tests and local runs
//! - `elasticsearch` - Elasticsearch cluster via the official client
//!
//! # Architecture
//!
//! - [`types`] - Course document, schema table, request, sort, and page window
//! - [`search`] - Criteria builder and the query executor
//! - [`core`] - The [`DocumentStore`] trait
//! - [`backends`] - Store implementations
//! - [`ingestion`] - Idempotent seeding at startup
//! - [`error`] - Error types for all operations
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use course_persistence::backends::memory::InMemoryStore;
//! use course_persistence::ingestion::{IngestionGuard, IngestionOutcome};
//! use course_persistence::search::CourseSearchService;
//! use course_persistence::types::SearchRequest;
//!
//! # tokio_test::block_on(async {
//! let store = Arc::new(InMemoryStore::new());
//!
//! let outcome = IngestionGuard::new(store.clone(), "courses").run().await.unwrap();
//! assert!(matches!(outcome, IngestionOutcome::Seeded { .. }));
//!
//! let service = CourseSearchService::new(store, "courses");
//! let request = SearchRequest::new()
//!     .with_query("yoga")
//!     .with_category("fitness")
//!     .with_sort("priceAsc");
//! let result = service.search(&request).await.unwrap();
//!
//! assert!(result.total_hits > 0);
//! assert!(result.documents.windows(2).all(|w| w[0].price <= w[1].price));
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod ingestion;
pub mod search;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{CourseDocument, QueryResult, SearchRequest};

// Re-export core traits
pub use core::{BackendKind, DocumentStore};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
