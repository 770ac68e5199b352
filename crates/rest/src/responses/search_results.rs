//! Search result page.

use chrono::{DateTime, Utc};
use course_persistence::types::{CourseDocument, QueryResult};
use serde::{Deserialize, Serialize};

/// The public view of a course in a result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    /// Course id.
    pub id: String,
    /// Course title.
    pub title: String,
    /// Category keyword.
    pub category: String,
    /// Price per enrollment.
    pub price: f64,
    /// Start of the next session.
    pub next_session_date: DateTime<Utc>,
}

impl From<CourseDocument> for CourseSummary {
    fn from(doc: CourseDocument) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            category: doc.category,
            price: doc.price,
            next_session_date: doc.next_session_date,
        }
    }
}

/// Body of a `/api/search` response.
///
/// `total` counts every match; `courses` holds only the requested page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total matching courses.
    pub total: u64,
    /// Courses on this page, in sort order.
    pub courses: Vec<CourseSummary>,
}

impl From<QueryResult> for SearchResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            total: result.total_hits,
            courses: result.documents.into_iter().map(CourseSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn doc() -> CourseDocument {
        CourseDocument {
            id: "course-001".to_string(),
            title: "Morning Yoga".to_string(),
            description: "Gentle stretching".to_string(),
            category: "fitness".to_string(),
            course_type: "COURSE".to_string(),
            min_age: 8,
            max_age: 14,
            price: 15.0,
            next_session_date: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_summary_json_shape() {
        let json = serde_json::to_value(CourseSummary::from(doc())).unwrap();
        assert_eq!(json["id"], "course-001");
        assert_eq!(json["price"], 15.0);
        assert_eq!(json["nextSessionDate"], "2025-06-01T10:00:00Z");
        assert!(json.get("description").is_none());
        assert!(json.get("minAge").is_none());
    }

    #[test]
    fn test_response_from_result() {
        let response = SearchResponse::from(QueryResult {
            total_hits: 7,
            documents: vec![doc()],
        });
        assert_eq!(response.total, 7);
        assert_eq!(response.courses.len(), 1);
        assert_eq!(response.courses[0].title, "Morning Yoga");
    }
}
