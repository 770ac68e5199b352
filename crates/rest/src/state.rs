//! Application state for the course search API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the search service over the configured store, and the
//! server configuration.

use std::sync::Arc;

use course_persistence::core::DocumentStore;
use course_persistence::search::CourseSearchService;

use crate::config::ServerConfig;

/// Shared application state.
///
/// # Type Parameters
///
/// * `S` - The document store type
pub struct AppState<S> {
    /// Search service over the shared store.
    search: Arc<CourseSearchService<Arc<S>>>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// S is behind Arc and need not be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            search: Arc::clone(&self.search),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates a new application state searching `config.collection` in `storage`.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        let search = CourseSearchService::new(storage, config.collection.clone());
        Self {
            search: Arc::new(search),
            config: Arc::new(config),
        }
    }

    /// Returns the search service.
    pub fn search(&self) -> &CourseSearchService<Arc<S>> {
        &self.search
    }

    /// Returns the document store.
    pub fn storage(&self) -> &S {
        self.search.store()
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the page size used when a request has none.
    pub fn default_page_size(&self) -> usize {
        self.config.default_page_size
    }

    /// Returns the largest page size a request may ask for.
    pub fn max_page_size(&self) -> usize {
        self.config.max_page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use course_persistence::core::BackendKind;
    use course_persistence::error::StorageResult;
    use course_persistence::types::{CourseDocument, CourseQuery, StoreHits};

    // Mock storage for testing
    struct MockStorage;

    #[async_trait]
    impl DocumentStore for MockStorage {
        fn backend_name(&self) -> &'static str {
            "mock"
        }

        fn kind(&self) -> BackendKind {
            BackendKind::Memory
        }

        async fn exists(&self, _collection: &str) -> StorageResult<bool> {
            Ok(true)
        }

        async fn bulk_upsert(
            &self,
            _collection: &str,
            _documents: &[CourseDocument],
        ) -> StorageResult<()> {
            unimplemented!()
        }

        async fn search(
            &self,
            _collection: &str,
            _query: &CourseQuery,
        ) -> StorageResult<StoreHits> {
            Ok(StoreHits::default())
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Arc::new(MockStorage), ServerConfig::for_testing());
        assert_eq!(state.storage().backend_name(), "mock");
        assert_eq!(state.search().collection(), "courses");
        assert_eq!(state.default_page_size(), 10);
        assert_eq!(state.max_page_size(), 100);
    }

    #[test]
    fn test_app_state_clone_shares_service() {
        let state = AppState::new(Arc::new(MockStorage), ServerConfig::for_testing());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.search, &cloned.search));
    }
}
