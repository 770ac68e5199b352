//! # course-rest - Course Search HTTP API
//!
//! This crate exposes the course catalog search over HTTP. It parses query
//! parameters into a [`SearchRequest`](course_persistence::types::SearchRequest),
//! runs it through the search service of `course-persistence`, and renders
//! one page of results.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use course_persistence::backends::memory::InMemoryStore;
//! use course_persistence::ingestion::IngestionGuard;
//! use course_rest::{create_app_with_config, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::for_testing();
//!     let store = Arc::new(InMemoryStore::new());
//!     IngestionGuard::new(Arc::clone(&store), &config.collection).run().await?;
//!
//!     let app = create_app_with_config(store, config);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/api/search` | GET | Course search |
//! | `/health` | GET | Status, backend name, timestamp |
//! | `/_liveness` | GET | Process is up |
//! | `/_readiness` | GET | Store health check |
//!
//! ## Search Parameters
//!
//! | Parameter | Type | Meaning |
//! |-----------|------|---------|
//! | `q` | text | Matched against title and description |
//! | `minAge` / `maxAge` | integer | Course age bounds |
//! | `category` / `type` | keyword | Exact match |
//! | `minPrice` / `maxPrice` | decimal | Price bounds |
//! | `startDate` | `YYYY-MM-DD` | Earliest next session |
//! | `sort` | `upcoming`, `priceAsc`, `priceDesc` | Ordering |
//! | `page` / `size` | integer | Zero-based page, page size |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": <code>, "message": <text>}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid-parameter | Unparsable or out-of-range parameter |
//! | 500 | search-backend-error | The backend rejected or failed the query |
//! | 503 | unavailable | The backend cannot be reached |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their HTTP mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (search service, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Search parameter extraction
//! - [`responses`] - Response bodies
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use course_persistence::core::DocumentStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_config(Arc::new(storage), ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// The store is shared so that the caller can keep using it, for example to
/// run ingestion before serving.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use course_rest::{create_app_with_config, ServerConfig};
/// use course_persistence::backends::memory::InMemoryStore;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(Arc::new(InMemoryStore::new()), config);
/// ```
pub fn create_app_with_config<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    info!(
        backend = storage.backend_name(),
        collection = %config.collection,
        "Creating course search API"
    );

    let state = AppState::new(storage, config.clone());
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "course_rest={level},course_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
