#![allow(dead_code)]

//! REST API test harness.
//!
//! Builds an axum-test server over a store seeded with the bundled sample
//! catalog, or over any store a test supplies.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use course_persistence::backends::memory::InMemoryStore;
use course_persistence::core::{BackendKind, DocumentStore};
use course_persistence::error::{BackendError, StorageResult};
use course_persistence::ingestion::IngestionGuard;
use course_persistence::types::{CourseDocument, CourseQuery, StoreHits};

use course_rest::{ServerConfig, create_app_with_config};

/// Builds a server over `store` with the given configuration.
pub fn server_with<S>(store: Arc<S>, config: ServerConfig) -> TestServer
where
    S: DocumentStore + 'static,
{
    let app = create_app_with_config(store, config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Builds a server over an in-memory store seeded with the sample catalog.
pub async fn seeded_server_with(config: ServerConfig) -> TestServer {
    let store = Arc::new(InMemoryStore::new());
    IngestionGuard::new(Arc::clone(&store), config.collection.clone())
        .run()
        .await
        .expect("Failed to seed sample catalog");
    server_with(store, config)
}

/// Builds a server over the sample catalog with test defaults.
pub async fn seeded_server() -> TestServer {
    seeded_server_with(ServerConfig::for_testing()).await
}

/// Which failure a [`FailingStore`] reports.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// The backend cannot be reached.
    Unreachable,
    /// The backend rejected the query.
    QueryRejected,
}

/// A store whose searches and health checks always fail.
#[derive(Debug)]
pub struct FailingStore {
    failure: Failure,
}

impl FailingStore {
    pub fn new(failure: Failure) -> Self {
        Self { failure }
    }

    fn error(&self) -> BackendError {
        match self.failure {
            Failure::Unreachable => BackendError::ConnectionFailed {
                backend_name: "failing".to_string(),
                message: "connection refused".to_string(),
            },
            Failure::QueryRejected => BackendError::QueryFailed {
                backend_name: "failing".to_string(),
                message: "parse_exception".to_string(),
                source: None,
            },
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Elasticsearch
    }

    async fn exists(&self, _collection: &str) -> StorageResult<bool> {
        Err(self.error().into())
    }

    async fn bulk_upsert(
        &self,
        _collection: &str,
        _documents: &[CourseDocument],
    ) -> StorageResult<()> {
        Err(self.error().into())
    }

    async fn search(&self, _collection: &str, _query: &CourseQuery) -> StorageResult<StoreHits> {
        Err(self.error().into())
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        Err(self.error())
    }
}
