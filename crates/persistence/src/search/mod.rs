//! Query translation and execution.
//!
//! - [`criteria`] - Turns a [`SearchRequest`](crate::types::SearchRequest) into a [`Criteria`] tree
//! - [`executor`] - Composes criteria, sort, and window and runs them against a store
//!
//! ```text
//! SearchRequest ─► FilterClause list ─► Criteria ─┐
//!               ─► SortStrategy ──────────────────┼─► CourseQuery ─► DocumentStore ─► QueryResult
//!               ─► PageWindow ────────────────────┘
//! ```

pub mod criteria;
pub mod executor;

pub use criteria::{Criteria, CriteriaValue, FilterClause, Operator, Predicate};
pub use executor::CourseSearchService;
