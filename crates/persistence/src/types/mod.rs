//! Core types for the persistence layer.
//!
//! - [`CourseDocument`], [`CourseField`] - The stored record and its schema
//! - [`SearchRequest`] - Optional search and filter parameters
//! - [`SortStrategy`] - Result ordering
//! - [`PageWindow`] - Offset/limit window
//! - [`CourseQuery`], [`StoreHits`], [`QueryResult`] - Composed query and results
//!
//! # Building a Search Request
//!
//! ```
//! use chrono::NaiveDate;
//! use course_persistence::types::{PageWindow, SearchRequest, SortStrategy};
//!
//! let request = SearchRequest::new()
//!     .with_query("pottery")
//!     .with_age_range(Some(8), None)
//!     .with_start_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
//!     .with_sort("priceDesc");
//!
//! assert_eq!(SortStrategy::from_keyword(request.sort_keyword()), SortStrategy::PriceDescending);
//!
//! let window = PageWindow::new(request.page(), request.size()).unwrap();
//! assert_eq!(window.offset, 0);
//! assert_eq!(window.limit, 10);
//! ```

mod course;
mod pagination;
mod query;
mod request;
mod sort;

pub use course::{CourseDocument, CourseField, FieldKind, validate_schema};
pub use pagination::PageWindow;
pub use query::{CourseQuery, QueryResult, StoreHits};
pub use request::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, SearchRequest};
pub use sort::{PRICE_ASC, PRICE_DESC, SortDirection, SortStrategy, UPCOMING};
