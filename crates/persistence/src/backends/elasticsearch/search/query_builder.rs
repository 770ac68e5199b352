//! Elasticsearch Query DSL builder.
//!
//! Translates a [`CourseQuery`] into a search request body.

use serde_json::{Value, json};

use crate::search::{Criteria, Operator, Predicate};
use crate::types::{CourseQuery, SortStrategy};

/// A complete Elasticsearch query body ready to be sent.
#[derive(Debug, Clone)]
pub struct EsQuery {
    /// The complete query body.
    pub body: Value,
    /// The index to search.
    pub index: String,
}

/// Builds Elasticsearch queries from course queries.
pub struct EsQueryBuilder {
    index: String,
}

impl EsQueryBuilder {
    /// Creates a new query builder targeting `index`.
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
        }
    }

    /// Builds a complete ES query.
    pub fn build(&self, query: &CourseQuery) -> EsQuery {
        let body = json!({
            "query": build_criteria(&query.criteria),
            "sort": build_sort(query.sort),
            "from": query.window.offset,
            "size": query.window.limit,
            "track_total_hits": true,
        });

        EsQuery {
            body,
            index: self.index.clone(),
        }
    }
}

/// Translates a criteria tree into a query clause.
pub fn build_criteria(criteria: &Criteria) -> Value {
    match criteria {
        Criteria::MatchAll => json!({ "match_all": {} }),
        Criteria::Predicate(p) => build_predicate(p),
        Criteria::And(children) => {
            let must: Vec<Value> = children.iter().map(build_criteria).collect();
            json!({ "bool": { "must": must } })
        }
        Criteria::Or(children) => {
            let should: Vec<Value> = children.iter().map(build_criteria).collect();
            json!({
                "bool": {
                    "should": should,
                    "minimum_should_match": 1
                }
            })
        }
    }
}

fn build_predicate(predicate: &Predicate) -> Value {
    let field = predicate.field.storage_name();
    let value = predicate.value.to_json();

    match predicate.op {
        Operator::Matches => json!({ "match": { field: { "query": value } } }),
        Operator::Eq => json!({ "term": { field: value } }),
        Operator::Gte => json!({ "range": { field: { "gte": value } } }),
        Operator::Lte => json!({ "range": { field: { "lte": value } } }),
    }
}

/// Builds the sort clause, always ending with the id tie-breaker.
fn build_sort(sort: SortStrategy) -> Value {
    json!([
        { sort.field().storage_name(): { "order": sort.direction().as_str() } },
        { sort.tie_breaker().storage_name(): { "order": "asc" } }
    ])
}
