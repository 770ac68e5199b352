//! Course search handler.
//!
//! `GET /api/search?q=..&category=..&sort=..&page=..&size=..`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use course_persistence::core::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::SearchParams;
use crate::responses::SearchResponse;
use crate::state::AppState;

/// Handler for course search.
///
/// # HTTP Request
///
/// `GET /api/search?params`
///
/// # Response
///
/// - `200 OK` - `{"total": n, "courses": [...]}`
/// - `400 Bad Request` - A parameter could not be parsed or is out of range
/// - `500`/`503` - The search backend failed or is unreachable
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    params: SearchParams,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    let request = params.into_request(state.default_page_size(), state.max_page_size());
    debug!(
        query = ?request.text_query(),
        sort = request.sort_keyword(),
        page = request.page(),
        size = request.size(),
        "Processing course search"
    );

    let result = state.search().search(&request).await?;
    debug!(total = result.total_hits, returned = result.documents.len(), "Search complete");

    Ok((StatusCode::OK, Json(SearchResponse::from(result))).into_response())
}
