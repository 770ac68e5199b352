//! Error types for the course search API.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are mapped to HTTP status codes
//! and a short machine-readable code:
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | Validation | 400 | invalid-parameter |
//! | Backend (query failed, internal) | 500 | search-backend-error |
//! | Backend (unreachable, unavailable) | 503 | unavailable |
//! | Ingestion | 500 | search-backend-error |
//!
//! Every error response has the body `{"error": <code>, "message": <text>}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use course_persistence::error::{BackendError, StorageError, ValidationError};
use std::fmt;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Bad request - invalid parameter (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The search backend failed (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },

    /// The search backend cannot be reached (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::BadRequest { .. } => "invalid-parameter",
            RestError::InternalError { .. } => "search-backend-error",
            RestError::ServiceUnavailable { .. } => "unavailable",
        }
    }

    fn message(&self) -> &str {
        match self {
            RestError::BadRequest { message }
            | RestError::InternalError { message }
            | RestError::ServiceUnavailable { message } => message,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.code(),
            "message": self.message(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}

// Implement conversions from storage errors
impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
            StorageError::Ingestion(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        tracing::warn!(backend = err.backend_name(), error = %err, "Search backend error");
        if err.is_unavailable() {
            RestError::ServiceUnavailable {
                message: err.to_string(),
            }
        } else {
            RestError::InternalError {
                message: err.to_string(),
            }
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: RestError =
            StorageError::from(ValidationError::invalid_parameter("page", "must be >= 0")).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "invalid-parameter");
        assert!(err.to_string().contains("page"));
    }

    #[test]
    fn test_backend_errors_map_by_kind() {
        let unavailable: RestError = BackendError::ConnectionFailed {
            backend_name: "elasticsearch".to_string(),
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let failed: RestError = BackendError::QueryFailed {
            backend_name: "elasticsearch".to_string(),
            message: "parse error".to_string(),
            source: None,
        }
        .into();
        assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failed.code(), "search-backend-error");
    }

    #[test]
    fn test_display() {
        let err = RestError::BadRequest {
            message: "bad size".to_string(),
        };
        assert_eq!(err.to_string(), "Bad request: bad size");
    }
}
