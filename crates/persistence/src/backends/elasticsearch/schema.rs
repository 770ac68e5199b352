//! Elasticsearch index mapping for course documents.

use elasticsearch::indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts};
use serde_json::{Map, Value, json};

use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::{CourseField, FieldKind};

use super::backend::{BACKEND_NAME, ElasticsearchBackend, ElasticsearchConfig};

fn field_mapping(kind: FieldKind) -> Value {
    match kind {
        FieldKind::Keyword => json!({ "type": "keyword" }),
        FieldKind::Text => json!({ "type": "text", "analyzer": "standard" }),
        FieldKind::Integer => json!({ "type": "integer" }),
        FieldKind::Double => json!({ "type": "double" }),
        FieldKind::Date => json!({
            "type": "date",
            "format": "strict_date_optional_time||epoch_millis||yyyy-MM-dd"
        }),
    }
}

/// Creates the index body (settings and mappings) for a course index.
///
/// Mapping is `strict`: documents carrying fields outside [`CourseField::ALL`]
/// are rejected instead of being dynamically mapped.
pub fn create_index_mapping(config: &ElasticsearchConfig) -> Value {
    let properties: Map<String, Value> = CourseField::ALL
        .iter()
        .map(|field| (field.storage_name().to_string(), field_mapping(field.kind())))
        .collect();

    json!({
        "settings": {
            "number_of_shards": config.number_of_shards,
            "number_of_replicas": config.number_of_replicas,
            "index.max_result_window": config.max_result_window,
            "refresh_interval": config.refresh_interval
        },
        "mappings": {
            "dynamic": "strict",
            "properties": properties
        }
    })
}

/// Returns whether the index for `collection` exists.
pub async fn index_exists(backend: &ElasticsearchBackend, collection: &str) -> StorageResult<bool> {
    let index = backend.index_name(collection);

    let response = backend
        .client()
        .indices()
        .exists(IndicesExistsParts::Index(&[&index]))
        .send()
        .await
        .map_err(|e| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Failed to check existence of index {}: {}", index, e),
            })
        })?;

    match response.status_code().as_u16() {
        200 => Ok(true),
        404 => Ok(false),
        status => Err(StorageError::Backend(BackendError::QueryFailed {
            backend_name: BACKEND_NAME.to_string(),
            message: format!(
                "Unexpected status {} checking existence of index {}",
                status, index
            ),
            source: None,
        })),
    }
}

/// Ensures the index for `collection` exists, creating it if necessary.
///
/// Returns `true` only when this call created the index.
pub async fn ensure_index(
    backend: &ElasticsearchBackend,
    collection: &str,
) -> StorageResult<bool> {
    if index_exists(backend, collection).await? {
        return Ok(false);
    }

    let index = backend.index_name(collection);
    let mapping = create_index_mapping(backend.config());

    let response = backend
        .client()
        .indices()
        .create(IndicesCreateParts::Index(&index))
        .body(mapping)
        .send()
        .await
        .map_err(|e| {
            StorageError::Backend(BackendError::Internal {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Failed to create index {}: {}", index, e),
                source: None,
            })
        })?;

    let status = response.status_code();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        // Another writer created it first
        if body.contains("resource_already_exists_exception") {
            return Ok(false);
        }
        return Err(StorageError::Backend(BackendError::Internal {
            backend_name: BACKEND_NAME.to_string(),
            message: format!(
                "Failed to create index {} (status {}): {}",
                index, status, body
            ),
            source: None,
        }));
    }

    tracing::debug!("Created Elasticsearch index '{}'", index);
    Ok(true)
}

/// Deletes the index for `collection`. A missing index is not an error.
pub async fn delete_index(
    backend: &ElasticsearchBackend,
    collection: &str,
) -> StorageResult<()> {
    let index = backend.index_name(collection);

    let response = backend
        .client()
        .indices()
        .delete(IndicesDeleteParts::Index(&[&index]))
        .send()
        .await
        .map_err(|e| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Failed to delete index {}: {}", index, e),
            })
        })?;

    match response.status_code().as_u16() {
        200 | 404 => {
            tracing::debug!("Deleted Elasticsearch index '{}'", index);
            Ok(())
        }
        status => Err(StorageError::Backend(BackendError::QueryFailed {
            backend_name: BACKEND_NAME.to_string(),
            message: format!("Unexpected status {} deleting index {}", status, index),
            source: None,
        })),
    }
}
