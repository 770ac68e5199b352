//! The composed query handed to a document store, and what comes back.

use serde::{Deserialize, Serialize};

use crate::search::Criteria;

use super::course::CourseDocument;
use super::pagination::PageWindow;
use super::sort::SortStrategy;

/// Criteria, ordering, and window combined into one store query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseQuery {
    /// Which documents match.
    pub criteria: Criteria,
    /// How matches are ordered.
    pub sort: SortStrategy,
    /// Which slice of the ordered matches to return.
    pub window: PageWindow,
}

impl CourseQuery {
    /// Creates a query.
    pub fn new(criteria: Criteria, sort: SortStrategy, window: PageWindow) -> Self {
        Self {
            criteria,
            sort,
            window,
        }
    }
}

/// Raw result of a store query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreHits {
    /// Total matching documents, independent of the window.
    pub total_hits: u64,
    /// Documents in the window, in sort order.
    pub hits: Vec<CourseDocument>,
}

/// Result of a course search.
///
/// `documents.len()` never exceeds the requested page size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Total matching documents, independent of the page size.
    pub total_hits: u64,
    /// The requested page, in sort order.
    pub documents: Vec<CourseDocument>,
}

impl From<StoreHits> for QueryResult {
    fn from(hits: StoreHits) -> Self {
        Self {
            total_hits: hits.total_hits,
            documents: hits.hits,
        }
    }
}
