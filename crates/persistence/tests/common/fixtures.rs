//! Course fixtures and builders.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use course_persistence::types::CourseDocument;

/// Builder for a course document with sensible defaults.
#[derive(Debug, Clone)]
pub struct CourseFixture {
    doc: CourseDocument,
}

impl CourseFixture {
    /// Creates a fixture with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            doc: CourseDocument {
                id: id.into(),
                title: title.into(),
                description: "A weekly course".to_string(),
                category: "general".to_string(),
                course_type: "COURSE".to_string(),
                min_age: 5,
                max_age: 15,
                price: 20.0,
                next_session_date: session(2025, 6, 1),
            },
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.doc.description = description.into();
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.doc.category = category.into();
        self
    }

    /// Sets the course type.
    pub fn with_type(mut self, course_type: impl Into<String>) -> Self {
        self.doc.course_type = course_type.into();
        self
    }

    /// Sets the age range.
    pub fn with_ages(mut self, min_age: i32, max_age: i32) -> Self {
        self.doc.min_age = min_age;
        self.doc.max_age = max_age;
        self
    }

    /// Sets the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.doc.price = price;
        self
    }

    /// Sets the next session date.
    pub fn with_session(mut self, at: DateTime<Utc>) -> Self {
        self.doc.next_session_date = at;
        self
    }

    /// Returns the document.
    pub fn build(self) -> CourseDocument {
        self.doc
    }
}

/// Returns 10:00 UTC on the given day.
pub fn session(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
}

/// Three yoga courses in the fitness category plus unrelated noise.
pub fn yoga_catalog() -> Vec<CourseDocument> {
    vec![
        CourseFixture::new("yoga-45", "Yoga Retreat")
            .with_category("fitness")
            .with_price(45.0)
            .with_session(session(2025, 6, 3))
            .build(),
        CourseFixture::new("yoga-15", "Morning Yoga")
            .with_category("fitness")
            .with_price(15.0)
            .with_session(session(2025, 6, 9))
            .build(),
        CourseFixture::new("yoga-30", "Stretch and Relax")
            .with_description("Slow yoga flow for flexibility")
            .with_category("fitness")
            .with_price(30.0)
            .with_session(session(2025, 6, 1))
            .build(),
        CourseFixture::new("yoga-art", "Yoga Poses Drawing")
            .with_category("art")
            .with_price(20.0)
            .build(),
        CourseFixture::new("yoga-pricey", "Premium Yoga")
            .with_category("fitness")
            .with_price(120.0)
            .build(),
        CourseFixture::new("run-1", "Trail Running")
            .with_category("fitness")
            .with_price(25.0)
            .build(),
    ]
}

/// Courses with distinct prices and dates for ordering checks.
pub fn ordering_catalog() -> Vec<CourseDocument> {
    vec![
        CourseFixture::new("a", "Alpha")
            .with_price(30.0)
            .with_session(session(2025, 8, 1))
            .build(),
        CourseFixture::new("b", "Bravo")
            .with_price(10.0)
            .with_session(session(2025, 6, 15))
            .build(),
        CourseFixture::new("c", "Charlie")
            .with_price(20.0)
            .with_session(session(2025, 7, 1))
            .build(),
        CourseFixture::new("d", "Delta")
            .with_price(20.0)
            .with_session(session(2025, 5, 20))
            .build(),
    ]
}
