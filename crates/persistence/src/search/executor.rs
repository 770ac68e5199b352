//! Query execution.
//!
//! [`CourseSearchService`] composes the criteria tree, sort strategy, and page
//! window of a request into one [`CourseQuery`] and hands it to a
//! [`DocumentStore`]. Results are returned exactly as the store reports them.

use tracing::debug;

use crate::core::DocumentStore;
use crate::error::{StorageResult, ValidationError};
use crate::types::{CourseQuery, PageWindow, QueryResult, SearchRequest, SortStrategy};

use super::criteria::Criteria;

/// Searches one collection of a document store.
#[derive(Debug, Clone)]
pub struct CourseSearchService<S> {
    store: S,
    collection: String,
}

impl<S: DocumentStore> CourseSearchService<S> {
    /// Creates a service searching `collection` in `store`.
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the collection being searched.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Builds the store query for a request without running it.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - page is negative, size is not positive,
    ///   or a price bound is not a finite number
    pub fn compose(request: &SearchRequest) -> StorageResult<CourseQuery> {
        let price_bounds = [("minPrice", request.min_price), ("maxPrice", request.max_price)];
        for (parameter, bound) in price_bounds {
            if let Some(v) = bound
                && !v.is_finite()
            {
                return Err(ValidationError::invalid_parameter(
                    parameter,
                    format!("must be a finite number, got {}", v),
                )
                .into());
            }
        }

        let window = PageWindow::new(request.page(), request.size())?;
        let criteria = Criteria::from_request(request);
        let sort = SortStrategy::from_keyword(request.sort_keyword());
        Ok(CourseQuery::new(criteria, sort, window))
    }

    /// Runs a search.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - invalid pagination or price bounds
    /// * `StorageError::Backend` - the store failed; not retried here
    pub async fn search(&self, request: &SearchRequest) -> StorageResult<QueryResult> {
        let query = Self::compose(request)?;

        debug!(
            collection = %self.collection,
            backend = self.store.backend_name(),
            clauses = query.criteria.conjuncts().len(),
            predicates = query.criteria.predicates().len(),
            sort = ?query.sort,
            offset = query.window.offset,
            limit = query.window.limit,
            "Executing course search"
        );

        let hits = self.store.search(&self.collection, &query).await?;

        debug!(
            total_hits = hits.total_hits,
            returned = hits.hits.len(),
            "Course search completed"
        );

        Ok(hits.into())
    }
}
