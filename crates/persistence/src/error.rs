//! Error types for the persistence layer.
//!
//! Errors are grouped by where they originate: caller input that fails
//! validation, the document store failing to run a query, and the startup
//! ingestion step failing to load seed data.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Caller supplied a malformed parameter.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The document store failed to execute an operation.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Seed data could not be loaded at startup.
    #[error(transparent)]
    Ingestion(#[from] IngestionError),
}

/// Errors caused by invalid caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A search parameter is out of range or could not be parsed.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },
}

impl ValidationError {
    /// Shorthand for an [`ValidationError::InvalidParameter`].
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}

/// Errors reported by a document store backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend could not be reached or a client could not be built.
    #[error("connection to {backend_name} failed: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// The backend is reachable but not able to serve requests.
    #[error("{backend_name} unavailable: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// The backend rejected or failed to run a composed query.
    #[error("{backend_name} query failed: {message}")]
    QueryFailed {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Any other backend failure.
    #[error("{backend_name} internal error: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BackendError {
    /// Returns the name of the backend that produced the error.
    pub fn backend_name(&self) -> &str {
        match self {
            BackendError::ConnectionFailed { backend_name, .. }
            | BackendError::Unavailable { backend_name, .. }
            | BackendError::QueryFailed { backend_name, .. }
            | BackendError::Internal { backend_name, .. } => backend_name,
        }
    }

    /// Returns true when retrying later could succeed (connectivity problems).
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            BackendError::ConnectionFailed { .. } | BackendError::Unavailable { .. }
        )
    }
}

/// Errors raised while loading seed documents at startup.
#[derive(Error, Debug)]
pub enum IngestionError {
    /// The seed resource could not be read.
    #[error("seed resource {} unreadable: {source}", .path.display())]
    SeedUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed resource is not a JSON list of course documents.
    #[error("seed resource {origin} is malformed: {source}")]
    SeedMalformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A seed document violates the document invariants.
    #[error("invalid seed document: {message}")]
    InvalidSeed { message: String },

    /// The bulk upsert of seed documents did not complete.
    #[error("bulk upsert into '{collection}' failed: {source}")]
    BulkUpsertFailed {
        collection: String,
        #[source]
        source: BackendError,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
