//! Document store trait.
//!
//! This module defines the [`DocumentStore`] trait, the only interface the
//! search and ingestion layers use to reach the external index. Stores own
//! every [`CourseDocument`]; callers never mutate or delete documents.

use async_trait::async_trait;

use crate::error::{BackendError, StorageResult};
use crate::types::{CourseDocument, CourseQuery, StoreHits};

use super::backend::BackendKind;

/// A search index addressable by document id.
///
/// `collection` names the logical index (for example `"courses"`); backends
/// map it onto their own naming scheme.
///
/// # Example
///
/// ```ignore
/// use course_persistence::core::DocumentStore;
///
/// async fn ensure_seeded<S: DocumentStore>(store: &S, docs: &[CourseDocument]) -> StorageResult<()> {
///     if !store.exists("courses").await? {
///         store.bulk_upsert("courses", docs).await?;
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns a human-readable name for this store.
    fn backend_name(&self) -> &'static str;

    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns whether the index for `collection` exists.
    async fn exists(&self, collection: &str) -> StorageResult<bool>;

    /// Inserts or overwrites `documents`, keyed by their ids.
    ///
    /// Upserting the same id twice leaves a single document.
    async fn bulk_upsert(&self, collection: &str, documents: &[CourseDocument])
    -> StorageResult<()>;

    /// Executes a composed query.
    ///
    /// Returns the total match count and the requested window in sort order.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - the store could not run the query
    async fn search(&self, collection: &str, query: &CourseQuery) -> StorageResult<StoreHits>;

    /// Checks that the store can serve requests.
    async fn health_check(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

#[async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for std::sync::Arc<T> {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    fn kind(&self) -> BackendKind {
        (**self).kind()
    }

    async fn exists(&self, collection: &str) -> StorageResult<bool> {
        (**self).exists(collection).await
    }

    async fn bulk_upsert(
        &self,
        collection: &str,
        documents: &[CourseDocument],
    ) -> StorageResult<()> {
        (**self).bulk_upsert(collection, documents).await
    }

    async fn search(&self, collection: &str, query: &CourseQuery) -> StorageResult<StoreHits> {
        (**self).search(collection, query).await
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        (**self).health_check().await
    }
}

#[async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    fn kind(&self) -> BackendKind {
        (**self).kind()
    }

    async fn exists(&self, collection: &str) -> StorageResult<bool> {
        (**self).exists(collection).await
    }

    async fn bulk_upsert(
        &self,
        collection: &str,
        documents: &[CourseDocument],
    ) -> StorageResult<()> {
        (**self).bulk_upsert(collection, documents).await
    }

    async fn search(&self, collection: &str, query: &CourseQuery) -> StorageResult<StoreHits> {
        (**self).search(collection, query).await
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        (**self).health_check().await
    }
}
