//! The idempotent ingestion step run before the server starts.

use tracing::{info, warn};

use crate::core::DocumentStore;
use crate::error::{IngestionError, StorageError, StorageResult};

use super::seed::SeedSource;

/// What an ingestion run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionOutcome {
    /// The collection already existed; nothing was written.
    AlreadyPopulated,
    /// The collection was absent and `count` seed documents were upserted.
    Seeded {
        /// Number of documents written.
        count: usize,
    },
}

/// Populates a collection from seed documents if it does not exist yet.
///
/// Not atomic across processes: two instances starting against an empty
/// store may both seed, which is harmless because upserts are keyed by id.
#[derive(Debug, Clone)]
pub struct IngestionGuard<S> {
    store: S,
    collection: String,
    source: SeedSource,
}

impl<S: DocumentStore> IngestionGuard<S> {
    /// Creates a guard seeding `collection` from the embedded sample catalog.
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            source: SeedSource::Embedded,
        }
    }

    /// Uses `source` instead of the embedded catalog.
    pub fn with_source(mut self, source: SeedSource) -> Self {
        self.source = source;
        self
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs the ingestion step.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - the existence check failed
    /// * `StorageError::Ingestion` - the seed could not be loaded or upserted
    pub async fn run(&self) -> StorageResult<IngestionOutcome> {
        if self.store.exists(&self.collection).await? {
            info!(
                collection = %self.collection,
                backend = self.store.backend_name(),
                "Collection already exists, skipping ingestion"
            );
            return Ok(IngestionOutcome::AlreadyPopulated);
        }

        let documents = self.source.load().await?;

        self.store
            .bulk_upsert(&self.collection, &documents)
            .await
            .map_err(|e| match e {
                StorageError::Backend(source) => {
                    warn!(collection = %self.collection, error = %source, "Seed upsert failed");
                    StorageError::Ingestion(IngestionError::BulkUpsertFailed {
                        collection: self.collection.clone(),
                        source,
                    })
                }
                other => other,
            })?;

        info!(
            collection = %self.collection,
            backend = self.store.backend_name(),
            source = %self.source.origin(),
            count = documents.len(),
            "Seeded collection"
        );

        Ok(IngestionOutcome::Seeded {
            count: documents.len(),
        })
    }
}
