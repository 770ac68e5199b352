//! Course search route configuration.

use axum::{Router, routing::get};
use course_persistence::core::DocumentStore;

use crate::handlers;
use crate::state::AppState;

/// Path of the search endpoint.
pub const SEARCH_PATH: &str = "/api/search";

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /api/search` - Course search
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe (checks the store)
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route(SEARCH_PATH, get(handlers::search_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .with_state(state)
}
