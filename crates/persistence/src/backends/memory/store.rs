//! [`DocumentStore`] implementation backed by process memory.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::core::{BackendKind, DocumentStore};
use crate::error::StorageResult;
use crate::types::{CourseDocument, CourseQuery, StoreHits};

use super::evaluate::{matches, sort_documents};

type Collection = BTreeMap<String, CourseDocument>;

/// In-memory document store.
///
/// Cheap to construct; every instance starts empty. Wrap it in an `Arc` to
/// share one store between the ingestion guard and the search service.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
    bulk_upsert_calls: AtomicUsize,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many times [`DocumentStore::bulk_upsert`] has been called.
    pub fn bulk_upsert_calls(&self) -> usize {
        self.bulk_upsert_calls.load(Ordering::SeqCst)
    }

    /// Returns the number of documents in `collection`, or 0 if it is absent.
    pub fn document_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    async fn exists(&self, collection: &str) -> StorageResult<bool> {
        Ok(self.collections.read().contains_key(collection))
    }

    async fn bulk_upsert(
        &self,
        collection: &str,
        documents: &[CourseDocument],
    ) -> StorageResult<()> {
        self.bulk_upsert_calls.fetch_add(1, Ordering::SeqCst);

        let mut collections = self.collections.write();
        let entries = collections.entry(collection.to_string()).or_default();
        for doc in documents {
            entries.insert(doc.id.clone(), doc.clone());
        }

        debug!(
            collection,
            upserted = documents.len(),
            total = entries.len(),
            "Upserted documents into memory store"
        );
        Ok(())
    }

    async fn search(&self, collection: &str, query: &CourseQuery) -> StorageResult<StoreHits> {
        let collections = self.collections.read();
        let Some(entries) = collections.get(collection) else {
            return Ok(StoreHits::default());
        };

        let mut matched = Vec::new();
        for doc in entries.values() {
            if matches(&query.criteria, doc)? {
                matched.push(doc);
            }
        }
        sort_documents(&mut matched, query.sort);

        let total_hits = matched.len() as u64;
        let offset = usize::try_from(query.window.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.window.limit).unwrap_or(usize::MAX);
        let hits = matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(StoreHits { total_hits, hits })
    }
}
