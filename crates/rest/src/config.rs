//! Server configuration for the course search API.
//!
//! This module provides configuration types for the server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `COURSE_SERVER_PORT` | 8080 | Server port |
//! | `COURSE_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `COURSE_LOG_LEVEL` | info | Log level |
//! | `COURSE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `COURSE_ENABLE_CORS` | true | Enable CORS |
//! | `COURSE_CORS_ORIGINS` | * | Allowed origins |
//! | `COURSE_DEFAULT_PAGE_SIZE` | 10 | Page size when `size` is absent |
//! | `COURSE_MAX_PAGE_SIZE` | 100 | Upper bound applied to `size` |
//! | `COURSE_STORAGE_BACKEND` | elasticsearch | `elasticsearch` or `memory` |
//! | `COURSE_COLLECTION` | courses | Logical index name |
//! | `COURSE_ES_NODES` | http://localhost:9200 | Elasticsearch nodes (comma-separated) |
//! | `COURSE_ES_INDEX_PREFIX` | (empty) | Index name prefix |
//! | `COURSE_ES_USERNAME` | | Basic auth user |
//! | `COURSE_ES_PASSWORD` | | Basic auth password |
//! | `COURSE_SEED_FILE` | | Seed catalog replacing the bundled sample |
//! | `COURSE_SKIP_INGESTION` | false | Do not seed at startup |
//!
//! # Example
//!
//! ```rust
//! use course_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;

use clap::Parser;
use course_persistence::core::BackendKind;

/// Server configuration for the course search API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "course-search")]
#[command(about = "Course catalog search server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "COURSE_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "COURSE_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "COURSE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "COURSE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "COURSE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "COURSE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Default page size for search results.
    #[arg(long, env = "COURSE_DEFAULT_PAGE_SIZE", default_value = "10")]
    pub default_page_size: usize,

    /// Maximum page size for search results.
    #[arg(long, env = "COURSE_MAX_PAGE_SIZE", default_value = "100")]
    pub max_page_size: usize,

    /// Document store backend.
    #[arg(long, env = "COURSE_STORAGE_BACKEND", default_value = "elasticsearch")]
    pub storage_backend: BackendKind,

    /// Logical collection (index) holding the courses.
    #[arg(long, env = "COURSE_COLLECTION", default_value = "courses")]
    pub collection: String,

    /// Elasticsearch node URLs (comma-separated).
    #[arg(
        long,
        env = "COURSE_ES_NODES",
        default_value = "http://localhost:9200",
        value_delimiter = ','
    )]
    pub es_nodes: Vec<String>,

    /// Prefix for Elasticsearch index names.
    #[arg(long, env = "COURSE_ES_INDEX_PREFIX", default_value = "")]
    pub es_index_prefix: String,

    /// Elasticsearch basic auth username.
    #[arg(long, env = "COURSE_ES_USERNAME")]
    pub es_username: Option<String>,

    /// Elasticsearch basic auth password.
    #[arg(long, env = "COURSE_ES_PASSWORD")]
    pub es_password: Option<String>,

    /// JSON seed catalog to ingest instead of the bundled sample.
    #[arg(long, env = "COURSE_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Skip the startup ingestion step.
    #[arg(long, env = "COURSE_SKIP_INGESTION", default_value = "false")]
    pub skip_ingestion: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            default_page_size: 10,
            max_page_size: 100,
            storage_backend: BackendKind::Elasticsearch,
            collection: "courses".to_string(),
            es_nodes: vec!["http://localhost:9200".to_string()],
            es_index_prefix: String::new(),
            es_username: None,
            es_password: None,
            seed_file: None,
            skip_ingestion: false,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if self.collection.trim().is_empty() {
            errors.push("Collection name cannot be empty".to_string());
        }

        if self.storage_backend == BackendKind::Elasticsearch {
            if self.es_nodes.iter().all(|n| n.trim().is_empty()) {
                errors.push("At least one Elasticsearch node is required".to_string());
            }
            if self.es_username.is_some() != self.es_password.is_some() {
                errors.push(
                    "Elasticsearch username and password must be set together".to_string(),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, the in-memory backend, and disables
    /// features that might interfere with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            storage_backend: BackendKind::Memory,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.storage_backend, BackendKind::Elasticsearch);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_invalid_page_sizes() {
        let config = ServerConfig {
            default_page_size: 100,
            max_page_size: 50,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = ServerConfig {
            port: 0,
            collection: " ".to_string(),
            es_username: Some("elastic".to_string()),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_parse_args() {
        let config = ServerConfig::try_parse_from([
            "course-search",
            "--storage-backend",
            "memory",
            "--es-nodes",
            "http://a:9200,http://b:9200",
            "--skip-ingestion",
        ])
        .unwrap();
        assert_eq!(config.storage_backend, BackendKind::Memory);
        assert_eq!(config.es_nodes.len(), 2);
        assert!(config.skip_ingestion);
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.storage_backend, BackendKind::Memory);
    }
}
