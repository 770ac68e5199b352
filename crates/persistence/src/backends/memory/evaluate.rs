//! Criteria evaluation and ordering over stored documents.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveTime, Utc};

use crate::error::BackendError;
use crate::search::{Criteria, CriteriaValue, Operator, Predicate};
use crate::types::{CourseDocument, CourseField, SortDirection, SortStrategy};

const BACKEND_NAME: &str = "memory";

/// A field value read from a document.
#[derive(Debug, Clone, PartialEq)]
enum FieldValue<'a> {
    Str(&'a str),
    Num(f64),
    Date(DateTime<Utc>),
}

fn field_value(doc: &CourseDocument, field: CourseField) -> FieldValue<'_> {
    match field {
        CourseField::Id => FieldValue::Str(&doc.id),
        CourseField::Title => FieldValue::Str(&doc.title),
        CourseField::Description => FieldValue::Str(&doc.description),
        CourseField::Category => FieldValue::Str(&doc.category),
        CourseField::Type => FieldValue::Str(&doc.course_type),
        CourseField::MinAge => FieldValue::Num(f64::from(doc.min_age)),
        CourseField::MaxAge => FieldValue::Num(f64::from(doc.max_age)),
        CourseField::Price => FieldValue::Num(doc.price),
        CourseField::NextSessionDate => FieldValue::Date(doc.next_session_date),
    }
}

/// Splits text into lowercase alphanumeric tokens.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn malformed(predicate: &Predicate) -> BackendError {
    BackendError::QueryFailed {
        backend_name: BACKEND_NAME.to_string(),
        message: format!(
            "cannot apply {:?} with {:?} to field '{}'",
            predicate.op, predicate.value, predicate.field
        ),
        source: None,
    }
}

/// Returns whether `doc` satisfies `criteria`.
///
/// # Errors
///
/// Returns [`BackendError::QueryFailed`] when a predicate's value type or
/// operator does not fit its field.
pub(crate) fn matches(criteria: &Criteria, doc: &CourseDocument) -> Result<bool, BackendError> {
    match criteria {
        Criteria::MatchAll => Ok(true),
        Criteria::Predicate(p) => matches_predicate(p, doc),
        Criteria::And(children) => {
            for child in children {
                if !matches(child, doc)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Criteria::Or(children) => {
            for child in children {
                if matches(child, doc)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

fn matches_predicate(predicate: &Predicate, doc: &CourseDocument) -> Result<bool, BackendError> {
    let actual = field_value(doc, predicate.field);

    match (predicate.op, &actual, &predicate.value) {
        (Operator::Matches, FieldValue::Str(field), CriteriaValue::Text(text)) => {
            let field_tokens = tokenize(field);
            Ok(tokenize(text).iter().any(|t| field_tokens.contains(t)))
        }
        (Operator::Eq, FieldValue::Str(field), CriteriaValue::Text(text)) => Ok(*field == text),
        (op, FieldValue::Num(field), value) => {
            let expected = match value {
                CriteriaValue::Integer(i) => f64::from(*i),
                CriteriaValue::Number(n) => *n,
                _ => return Err(malformed(predicate)),
            };
            compare(op, field.total_cmp(&expected)).ok_or_else(|| malformed(predicate))
        }
        (op, FieldValue::Date(field), CriteriaValue::Date(date)) => {
            let start_of_day = date.and_time(NaiveTime::default()).and_utc();
            compare(op, field.cmp(&start_of_day)).ok_or_else(|| malformed(predicate))
        }
        _ => Err(malformed(predicate)),
    }
}

fn compare(op: Operator, ordering: Ordering) -> Option<bool> {
    match op {
        Operator::Eq => Some(ordering == Ordering::Equal),
        Operator::Gte => Some(ordering != Ordering::Less),
        Operator::Lte => Some(ordering != Ordering::Greater),
        Operator::Matches => None,
    }
}

fn cmp_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Str(a), FieldValue::Str(b)) => a.cmp(b),
        (FieldValue::Num(a), FieldValue::Num(b)) => a.total_cmp(b),
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Orders documents by a sort strategy, breaking ties by id ascending.
pub(crate) fn sort_documents(docs: &mut [&CourseDocument], sort: SortStrategy) {
    let field = sort.field();
    let tie_breaker = sort.tie_breaker();

    docs.sort_by(|a, b| {
        let primary = cmp_values(&field_value(a, field), &field_value(b, field));
        let primary = match sort.direction() {
            SortDirection::Ascending => primary,
            SortDirection::Descending => primary.reverse(),
        };
        primary.then_with(|| {
            cmp_values(&field_value(a, tie_breaker), &field_value(b, tie_breaker))
        })
    });
}
