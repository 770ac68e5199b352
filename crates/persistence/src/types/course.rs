//! The course document and its explicit storage schema.
//!
//! [`CourseDocument`] is the record shape persisted by every document store.
//! Its field-to-storage-name table lives in [`CourseField::ALL`]; backends
//! derive their mappings from that table instead of discovering fields at
//! runtime, and [`validate_schema`] checks the table against the serde shape
//! once at startup.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDocument {
    /// Stable unique identifier. Upserts with the same id overwrite.
    pub id: String,
    /// Course title (full-text searchable).
    pub title: String,
    /// Long description (full-text searchable).
    pub description: String,
    /// Category keyword, e.g. `"fitness"`.
    pub category: String,
    /// Course type keyword, e.g. `"COURSE"`, `"CLUB"`, `"ONE_TIME"`.
    #[serde(rename = "type")]
    pub course_type: String,
    /// Youngest age the course is meant for.
    pub min_age: i32,
    /// Oldest age the course is meant for.
    pub max_age: i32,
    /// Price per enrollment.
    pub price: f64,
    /// Start of the next scheduled session.
    pub next_session_date: DateTime<Utc>,
}

/// How a field is indexed by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Exact-match string.
    Keyword,
    /// Analyzed full-text string.
    Text,
    /// 32-bit integer.
    Integer,
    /// Double precision number.
    Double,
    /// Timestamp.
    Date,
}

/// One stored field of [`CourseDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourseField {
    /// `id`
    Id,
    /// `title`
    Title,
    /// `description`
    Description,
    /// `category`
    Category,
    /// `type`
    Type,
    /// `minAge`
    MinAge,
    /// `maxAge`
    MaxAge,
    /// `price`
    Price,
    /// `nextSessionDate`
    NextSessionDate,
}

impl CourseField {
    /// Every stored field, in declaration order.
    pub const ALL: [CourseField; 9] = [
        CourseField::Id,
        CourseField::Title,
        CourseField::Description,
        CourseField::Category,
        CourseField::Type,
        CourseField::MinAge,
        CourseField::MaxAge,
        CourseField::Price,
        CourseField::NextSessionDate,
    ];

    /// The name the field is stored under.
    pub const fn storage_name(self) -> &'static str {
        match self {
            CourseField::Id => "id",
            CourseField::Title => "title",
            CourseField::Description => "description",
            CourseField::Category => "category",
            CourseField::Type => "type",
            CourseField::MinAge => "minAge",
            CourseField::MaxAge => "maxAge",
            CourseField::Price => "price",
            CourseField::NextSessionDate => "nextSessionDate",
        }
    }

    /// How the field is indexed.
    pub const fn kind(self) -> FieldKind {
        match self {
            CourseField::Id | CourseField::Category | CourseField::Type => FieldKind::Keyword,
            CourseField::Title | CourseField::Description => FieldKind::Text,
            CourseField::MinAge | CourseField::MaxAge => FieldKind::Integer,
            CourseField::Price => FieldKind::Double,
            CourseField::NextSessionDate => FieldKind::Date,
        }
    }
}

impl std::fmt::Display for CourseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.storage_name())
    }
}

/// Checks the field table against the serialized shape of [`CourseDocument`].
///
/// Fails if two fields share a storage name, or if the serde output of a
/// document has a key the table does not list (or vice versa).
pub fn validate_schema() -> Result<(), String> {
    let mut seen = HashSet::new();
    for field in CourseField::ALL {
        if !seen.insert(field.storage_name()) {
            return Err(format!("duplicate storage name '{}'", field.storage_name()));
        }
    }

    let probe = CourseDocument {
        id: String::new(),
        title: String::new(),
        description: String::new(),
        category: String::new(),
        course_type: String::new(),
        min_age: 0,
        max_age: 0,
        price: 0.0,
        next_session_date: DateTime::<Utc>::UNIX_EPOCH,
    };
    let value = serde_json::to_value(&probe).map_err(|e| e.to_string())?;
    let object = value
        .as_object()
        .ok_or_else(|| "course document does not serialize to an object".to_string())?;

    let serialized: HashSet<&str> = object.keys().map(String::as_str).collect();
    if serialized != seen {
        let mut missing: Vec<_> = serialized.difference(&seen).copied().collect();
        let mut extra: Vec<_> = seen.difference(&serialized).copied().collect();
        missing.sort_unstable();
        extra.sort_unstable();
        return Err(format!(
            "field table out of sync with document shape (unlisted: {:?}, not serialized: {:?})",
            missing, extra
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_is_consistent() {
        assert!(validate_schema().is_ok());
    }

    #[test]
    fn test_storage_names() {
        assert_eq!(CourseField::Type.storage_name(), "type");
        assert_eq!(CourseField::MinAge.storage_name(), "minAge");
        assert_eq!(CourseField::NextSessionDate.storage_name(), "nextSessionDate");
        assert_eq!(CourseField::Price.kind(), FieldKind::Double);
        assert_eq!(CourseField::Title.kind(), FieldKind::Text);
        assert_eq!(CourseField::Category.kind(), FieldKind::Keyword);
    }

    #[test]
    fn test_deserialize_seed_shape() {
        let doc: CourseDocument = serde_json::from_value(json!({
            "id": "c-1",
            "title": "Morning Yoga",
            "description": "Gentle yoga flow",
            "category": "fitness",
            "type": "COURSE",
            "minAge": 12,
            "maxAge": 99,
            "price": 25.0,
            "nextSessionDate": "2025-07-01T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(doc.course_type, "COURSE");
        assert_eq!(doc.min_age, 12);
        assert_eq!(doc.next_session_date.to_rfc3339(), "2025-07-01T09:00:00+00:00");
    }

    #[test]
    fn test_field_serializes_as_storage_name() {
        for field in CourseField::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.storage_name());
            let back: CourseField = serde_json::from_value(json).unwrap();
            assert_eq!(back, field);
        }
    }
}
