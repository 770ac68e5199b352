//! In-memory document store.
//!
//! Keeps every collection in a `BTreeMap` keyed by document id and evaluates
//! [`Criteria`](crate::search::Criteria) trees directly against the stored
//! documents. Full-text predicates use case-insensitive token matching: a
//! document matches when any token of the query text occurs among the
//! field's tokens.
//!
//! Used by the test suites and by `--storage-backend memory` for local runs.

mod evaluate;
mod store;

pub use store::InMemoryStore;
