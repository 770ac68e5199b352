//! [`DocumentStore`] implementation for Elasticsearch.

use async_trait::async_trait;
use elasticsearch::params::Refresh;
use elasticsearch::{BulkOperation, BulkParts, SearchParts};
use serde_json::Value;

use crate::core::{BackendKind, DocumentStore};
use crate::error::{BackendError, StorageError, StorageResult, ValidationError};
use crate::types::{CourseDocument, CourseQuery, StoreHits};

use super::backend::{BACKEND_NAME, ElasticsearchBackend};
use super::schema;
use super::search::EsQueryBuilder;

/// Number of failed ids quoted in a bulk error message.
const MAX_REPORTED_FAILURES: usize = 5;

fn query_failed(message: String) -> StorageError {
    StorageError::Backend(BackendError::QueryFailed {
        backend_name: BACKEND_NAME.to_string(),
        message,
        source: None,
    })
}

fn unavailable(message: String) -> StorageError {
    StorageError::Backend(BackendError::Unavailable {
        backend_name: BACKEND_NAME.to_string(),
        message,
    })
}

/// Collects `(id, reason)` for every failed item of a bulk response.
fn bulk_failures(body: &Value) -> Vec<(String, String)> {
    body.get("items")
        .and_then(|items| items.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("index"))
                .filter_map(|op| {
                    let error = op.get("error")?;
                    let id = op.get("_id").and_then(|v| v.as_str()).unwrap_or("?");
                    let reason = error
                        .get("reason")
                        .and_then(|v| v.as_str())
                        .unwrap_or("unknown error");
                    Some((id.to_string(), reason.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parses `hits.total.value` and `hits.hits[]._source` from a search response.
pub(crate) fn parse_search_response(body: &Value) -> StorageResult<StoreHits> {
    let hits = body
        .get("hits")
        .and_then(|h| h.get("hits"))
        .and_then(|h| h.as_array())
        .cloned()
        .unwrap_or_default();

    let mut documents = Vec::with_capacity(hits.len());
    for hit in hits {
        let Some(source) = hit.get("_source") else {
            continue;
        };
        let doc: CourseDocument = serde_json::from_value(source.clone()).map_err(|e| {
            StorageError::Backend(BackendError::Internal {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Failed to parse hit source: {}", e),
                source: Some(Box::new(e)),
            })
        })?;
        documents.push(doc);
    }

    let total_hits = body
        .get("hits")
        .and_then(|h| h.get("total"))
        .and_then(|t| t.get("value"))
        .and_then(|v| v.as_u64())
        .unwrap_or(documents.len() as u64);

    Ok(StoreHits {
        total_hits,
        hits: documents,
    })
}

impl ElasticsearchBackend {
    /// Sends one `_bulk` request indexing `documents` by id.
    async fn send_bulk(
        &self,
        collection: &str,
        documents: &[CourseDocument],
    ) -> StorageResult<()> {
        let index = self.index_name(collection);
        let operations: Vec<BulkOperation<&CourseDocument>> = documents
            .iter()
            .map(|doc| BulkOperation::index(doc).id(doc.id.as_str()).into())
            .collect();

        let response = self
            .client()
            .bulk(BulkParts::Index(&index))
            .body(operations)
            .refresh(Refresh::WaitFor)
            .send()
            .await
            .map_err(|e| unavailable(format!("Bulk request to {} failed: {}", index, e)))?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(query_failed(format!(
                "Bulk request to {} returned status {}: {}",
                index, status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| query_failed(format!("Failed to parse bulk response: {}", e)))?;

        if body.get("errors").and_then(|v| v.as_bool()).unwrap_or(false) {
            let failures = bulk_failures(&body);
            let quoted: Vec<String> = failures
                .iter()
                .take(MAX_REPORTED_FAILURES)
                .map(|(id, reason)| format!("{} ({})", id, reason))
                .collect();
            return Err(query_failed(format!(
                "{} of {} documents failed to index into {}: {}",
                failures.len(),
                documents.len(),
                index,
                quoted.join(", ")
            )));
        }

        tracing::debug!(index = %index, count = documents.len(), "Bulk indexed documents");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for ElasticsearchBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Elasticsearch
    }

    async fn exists(&self, collection: &str) -> StorageResult<bool> {
        schema::index_exists(self, collection).await
    }

    async fn bulk_upsert(
        &self,
        collection: &str,
        documents: &[CourseDocument],
    ) -> StorageResult<()> {
        let created = schema::ensure_index(self, collection).await?;
        if documents.is_empty() {
            return Ok(());
        }

        let result = self.send_bulk(collection, documents).await;
        if result.is_err() && created {
            // A half-loaded index would pass the next existence check
            if let Err(e) = schema::delete_index(self, collection).await {
                tracing::warn!(
                    collection,
                    error = %e,
                    "Failed to remove index after bulk failure"
                );
            }
        }
        result
    }

    async fn search(&self, collection: &str, query: &CourseQuery) -> StorageResult<StoreHits> {
        let window_end = query.window.offset.saturating_add(query.window.limit);
        let max_window = u64::from(self.config().max_result_window);
        if window_end > max_window {
            return Err(ValidationError::invalid_parameter(
                "page",
                format!(
                    "results beyond {} are not addressable, requested up to {}",
                    max_window, window_end
                ),
            )
            .into());
        }

        let index = self.index_name(collection);
        let es_query = EsQueryBuilder::new(index.clone()).build(query);

        let response = self
            .client()
            .search(SearchParts::Index(&[&es_query.index]))
            .body(es_query.body)
            .send()
            .await
            .map_err(|e| unavailable(format!("Search on {} failed: {}", index, e)))?;

        if !response.status_code().is_success() {
            let body = response.text().await.unwrap_or_default();
            // Nothing ingested yet
            if body.contains("index_not_found_exception") {
                tracing::debug!(index = %index, "Search on missing index");
                return Ok(StoreHits::default());
            }
            return Err(query_failed(format!("Search failed: {}", body)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| query_failed(format!("Failed to parse search response: {}", e)))?;

        parse_search_response(&body)
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        self.cluster_health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::elasticsearch::ElasticsearchConfig;
    use crate::search::Criteria;
    use crate::types::{PageWindow, SortStrategy};
    use serde_json::json;

    #[tokio::test]
    async fn test_search_beyond_result_window_is_invalid() {
        // Rejected before any request is sent; no cluster needed
        let backend = ElasticsearchBackend::new(ElasticsearchConfig {
            max_result_window: 100,
            ..Default::default()
        })
        .unwrap();
        let deep = CourseQuery::new(
            Criteria::MatchAll,
            SortStrategy::default(),
            PageWindow::new(10, 11).unwrap(),
        );
        let err = backend.search("courses", &deep).await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::Validation(ValidationError::InvalidParameter { ref parameter, .. })
                if parameter == "page"
        ));
    }

    #[test]
    fn test_parse_search_response() {
        let body = json!({
            "hits": {
                "total": { "value": 42, "relation": "eq" },
                "hits": [{
                    "_id": "c1",
                    "_source": {
                        "id": "c1",
                        "title": "Yoga for Kids",
                        "description": "Gentle stretching",
                        "category": "fitness",
                        "type": "COURSE",
                        "minAge": 6,
                        "maxAge": 10,
                        "price": 25.0,
                        "nextSessionDate": "2025-06-15T10:00:00Z"
                    }
                }]
            }
        });

        let hits = parse_search_response(&body).unwrap();
        assert_eq!(hits.total_hits, 42);
        assert_eq!(hits.hits.len(), 1);
        assert_eq!(hits.hits[0].title, "Yoga for Kids");
    }

    #[test]
    fn test_parse_search_response_rejects_bad_source() {
        let body = json!({
            "hits": {
                "total": { "value": 1 },
                "hits": [{ "_source": { "id": "c1" } }]
            }
        });
        assert!(parse_search_response(&body).is_err());
    }

    #[test]
    fn test_bulk_failures() {
        let body = json!({
            "errors": true,
            "items": [
                { "index": { "_id": "a", "status": 201 } },
                { "index": { "_id": "b", "status": 400, "error": { "reason": "mapper_parsing_exception" } } }
            ]
        });
        assert_eq!(
            bulk_failures(&body),
            vec![("b".to_string(), "mapper_parsing_exception".to_string())]
        );
    }
}
