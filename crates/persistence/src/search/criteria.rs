//! Criteria expression trees.
//!
//! A [`SearchRequest`] is first turned into a flat list of [`FilterClause`]s,
//! one per active filter, and that list is then folded into a single
//! [`Criteria`] tree. Absent filters produce no clause at all, so an empty
//! request folds to [`Criteria::MatchAll`].
//!
//! ```
//! use course_persistence::search::Criteria;
//! use course_persistence::types::SearchRequest;
//!
//! let criteria = Criteria::from_request(&SearchRequest::new());
//! assert!(criteria.is_match_all());
//!
//! let criteria = Criteria::from_request(
//!     &SearchRequest::new().with_query("yoga").with_category("fitness"),
//! );
//! assert_eq!(criteria.predicates().len(), 3);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{CourseField, SearchRequest};

/// Comparison applied by a leaf predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Analyzed token match (any query token occurs in the field).
    Matches,
    /// Exact equality.
    Eq,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
}

/// Right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CriteriaValue {
    /// String value.
    Text(String),
    /// Integer value.
    Integer(i32),
    /// Floating point value.
    Number(f64),
    /// Calendar date (compared against the start of that day, UTC).
    Date(NaiveDate),
}

impl CriteriaValue {
    /// Returns the value as JSON, with dates in ISO `YYYY-MM-DD` form.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CriteriaValue::Text(s) => serde_json::Value::from(s.as_str()),
            CriteriaValue::Integer(i) => serde_json::Value::from(*i),
            CriteriaValue::Number(n) => serde_json::Value::from(*n),
            CriteriaValue::Date(d) => serde_json::Value::from(d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// A leaf predicate: `field op value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    /// The field being tested.
    pub field: CourseField,
    /// The comparison.
    pub op: Operator,
    /// The value compared against.
    pub value: CriteriaValue,
}

impl Predicate {
    /// Creates a predicate.
    pub fn new(field: CourseField, op: Operator, value: CriteriaValue) -> Self {
        Self { field, op, value }
    }
}

/// A boolean expression tree over course fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Criteria {
    /// Matches every document.
    MatchAll,
    /// A single predicate.
    Predicate(Predicate),
    /// All children must match.
    And(Vec<Criteria>),
    /// At least one child must match.
    Or(Vec<Criteria>),
}

/// One typed filter derived from a request.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterClause {
    /// Full-text match against title or description.
    FullText(String),
    /// `minAge >= v`
    MinAge(i32),
    /// `maxAge <= v`
    MaxAge(i32),
    /// `category == v`
    Category(String),
    /// `type == v`
    Type(String),
    /// `price >= v`
    MinPrice(f64),
    /// `price <= v`
    MaxPrice(f64),
    /// `nextSessionDate >= v`
    StartDate(NaiveDate),
}

impl FilterClause {
    /// Collects the clauses for every active filter of a request.
    ///
    /// The text query is trimmed; blank text produces no clause.
    pub fn from_request(request: &SearchRequest) -> Vec<FilterClause> {
        let mut clauses = Vec::new();

        if let Some(text) = request.text_query() {
            clauses.push(FilterClause::FullText(text.to_string()));
        }
        if let Some(v) = request.min_age {
            clauses.push(FilterClause::MinAge(v));
        }
        if let Some(v) = request.max_age {
            clauses.push(FilterClause::MaxAge(v));
        }
        if let Some(ref v) = request.category {
            clauses.push(FilterClause::Category(v.clone()));
        }
        if let Some(ref v) = request.course_type {
            clauses.push(FilterClause::Type(v.clone()));
        }
        if let Some(v) = request.min_price {
            clauses.push(FilterClause::MinPrice(v));
        }
        if let Some(v) = request.max_price {
            clauses.push(FilterClause::MaxPrice(v));
        }
        if let Some(v) = request.start_date {
            clauses.push(FilterClause::StartDate(v));
        }

        clauses
    }

    /// Converts the clause into its criteria subtree.
    pub fn into_criteria(self) -> Criteria {
        use CourseField as F;
        use CriteriaValue as V;
        use Operator as Op;

        let leaf = |field, op, value| Criteria::Predicate(Predicate::new(field, op, value));

        match self {
            FilterClause::FullText(text) => Criteria::Or(vec![
                leaf(F::Title, Op::Matches, V::Text(text.clone())),
                leaf(F::Description, Op::Matches, V::Text(text)),
            ]),
            FilterClause::MinAge(v) => leaf(F::MinAge, Op::Gte, V::Integer(v)),
            FilterClause::MaxAge(v) => leaf(F::MaxAge, Op::Lte, V::Integer(v)),
            FilterClause::Category(v) => leaf(F::Category, Op::Eq, V::Text(v)),
            FilterClause::Type(v) => leaf(F::Type, Op::Eq, V::Text(v)),
            FilterClause::MinPrice(v) => leaf(F::Price, Op::Gte, V::Number(v)),
            FilterClause::MaxPrice(v) => leaf(F::Price, Op::Lte, V::Number(v)),
            FilterClause::StartDate(v) => leaf(F::NextSessionDate, Op::Gte, V::Date(v)),
        }
    }
}

impl Criteria {
    /// Builds the criteria tree for a request.
    pub fn from_request(request: &SearchRequest) -> Self {
        Self::fold(FilterClause::from_request(request))
    }

    /// Folds a clause list with AND semantics.
    ///
    /// No clauses give [`Criteria::MatchAll`], one clause is returned as is,
    /// and more are combined into a single [`Criteria::And`].
    pub fn fold(clauses: Vec<FilterClause>) -> Self {
        let mut children: Vec<Criteria> = clauses
            .into_iter()
            .map(FilterClause::into_criteria)
            .collect();

        match children.len() {
            0 => Criteria::MatchAll,
            1 => children.remove(0),
            _ => Criteria::And(children),
        }
    }

    /// Returns true if the tree places no constraint.
    pub fn is_match_all(&self) -> bool {
        match self {
            Criteria::MatchAll => true,
            Criteria::Predicate(_) => false,
            Criteria::And(children) => children.iter().all(Criteria::is_match_all),
            // An empty OR matches nothing, which is a constraint.
            Criteria::Or(children) => {
                !children.is_empty() && children.iter().any(Criteria::is_match_all)
            }
        }
    }

    /// Returns every leaf predicate, depth first.
    pub fn predicates(&self) -> Vec<&Predicate> {
        let mut out = Vec::new();
        self.collect_predicates(&mut out);
        out
    }

    fn collect_predicates<'a>(&'a self, out: &mut Vec<&'a Predicate>) {
        match self {
            Criteria::MatchAll => {}
            Criteria::Predicate(p) => out.push(p),
            Criteria::And(children) | Criteria::Or(children) => {
                for child in children {
                    child.collect_predicates(out);
                }
            }
        }
    }

    /// Returns the direct children of a top-level AND, or the tree itself.
    pub fn conjuncts(&self) -> Vec<&Criteria> {
        match self {
            Criteria::MatchAll => Vec::new(),
            Criteria::And(children) => children.iter().collect(),
            other => vec![other],
        }
    }
}
