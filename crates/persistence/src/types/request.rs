//! Search request parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Page index used when a request does not set one.
pub const DEFAULT_PAGE: i64 = 0;

/// Page size used when a request does not set one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A loosely specified course search.
///
/// Every filter is optional; an absent filter places no constraint on its
/// dimension. Unset `page`/`size` fall back to [`DEFAULT_PAGE`] and
/// [`DEFAULT_PAGE_SIZE`].
///
/// # Example
///
/// ```
/// use course_persistence::types::SearchRequest;
///
/// let request = SearchRequest::new()
///     .with_query("yoga")
///     .with_category("fitness")
///     .with_price_range(Some(10.0), Some(50.0))
///     .with_sort("priceAsc")
///     .with_page(0, 2);
///
/// assert_eq!(request.page(), 0);
/// assert_eq!(request.size(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query matched against title and description.
    pub q: Option<String>,
    /// Lower bound on the course's `minAge`.
    pub min_age: Option<i32>,
    /// Upper bound on the course's `maxAge`.
    pub max_age: Option<i32>,
    /// Exact category.
    pub category: Option<String>,
    /// Exact course type.
    pub course_type: Option<String>,
    /// Lower bound on price.
    pub min_price: Option<f64>,
    /// Upper bound on price.
    pub max_price: Option<f64>,
    /// Earliest acceptable `nextSessionDate`.
    pub start_date: Option<NaiveDate>,
    /// Sort keyword (`priceAsc`, `priceDesc`, anything else sorts by date).
    pub sort: Option<String>,
    /// Zero-based page index.
    pub page: Option<i64>,
    /// Page size.
    pub size: Option<i64>,
}

impl SearchRequest {
    /// Creates an unconstrained request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Sets the age bounds.
    pub fn with_age_range(mut self, min_age: Option<i32>, max_age: Option<i32>) -> Self {
        self.min_age = min_age;
        self.max_age = max_age;
        self
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the course type filter.
    pub fn with_type(mut self, course_type: impl Into<String>) -> Self {
        self.course_type = Some(course_type.into());
        self
    }

    /// Sets the price bounds.
    pub fn with_price_range(mut self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    /// Sets the earliest session date.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the sort keyword.
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets page index and size.
    pub fn with_page(mut self, page: i64, size: i64) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    /// Returns the trimmed full-text query, or `None` if absent or blank.
    pub fn text_query(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// Returns the sort keyword, empty if unset.
    pub fn sort_keyword(&self) -> &str {
        self.sort.as_deref().unwrap_or_default()
    }

    /// Returns the page index, defaulting to [`DEFAULT_PAGE`].
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Returns the page size, defaulting to [`DEFAULT_PAGE_SIZE`].
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
