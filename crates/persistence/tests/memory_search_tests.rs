//! End-to-end search behaviour against the in-memory store.

mod common;

use std::sync::Arc;

use chrono::NaiveDate;

use common::{CourseFixture, ordering_catalog, session, yoga_catalog};
use course_persistence::backends::memory::InMemoryStore;
use course_persistence::core::DocumentStore;
use course_persistence::error::{StorageError, ValidationError};
use course_persistence::search::CourseSearchService;
use course_persistence::types::{CourseDocument, SearchRequest};

async fn service_with(docs: &[CourseDocument]) -> CourseSearchService<Arc<InMemoryStore>> {
    let store = Arc::new(InMemoryStore::new());
    store.bulk_upsert("courses", docs).await.unwrap();
    CourseSearchService::new(store, "courses")
}

fn ids(docs: &[CourseDocument]) -> Vec<&str> {
    docs.iter().map(|d| d.id.as_str()).collect()
}

#[tokio::test]
async fn test_yoga_fitness_scenario() {
    let service = service_with(&yoga_catalog()).await;

    let request = SearchRequest::new()
        .with_query("yoga")
        .with_category("fitness")
        .with_price_range(Some(10.0), Some(50.0))
        .with_sort("priceAsc")
        .with_page(0, 2);
    let result = service.search(&request).await.unwrap();

    assert_eq!(result.total_hits, 3);
    let prices: Vec<f64> = result.documents.iter().map(|d| d.price).collect();
    assert_eq!(prices, vec![15.0, 30.0]);
}

#[tokio::test]
async fn test_empty_request_matches_everything() {
    let catalog = yoga_catalog();
    let service = service_with(&catalog).await;

    let result = service
        .search(&SearchRequest::new().with_page(0, 100))
        .await
        .unwrap();
    assert_eq!(result.total_hits, catalog.len() as u64);
    assert_eq!(result.documents.len(), catalog.len());
}

#[tokio::test]
async fn test_blank_query_is_ignored() {
    let service = service_with(&yoga_catalog()).await;

    let blank = service
        .search(&SearchRequest::new().with_query("   "))
        .await
        .unwrap();
    let absent = service.search(&SearchRequest::new()).await.unwrap();
    assert_eq!(blank, absent);
}

#[tokio::test]
async fn test_full_text_matches_description() {
    let service = service_with(&yoga_catalog()).await;

    let result = service
        .search(&SearchRequest::new().with_query("FLEXIBILITY"))
        .await
        .unwrap();
    assert_eq!(ids(&result.documents), vec!["yoga-30"]);
}

#[tokio::test]
async fn test_age_bounds_are_conjunctive() {
    let docs = vec![
        CourseFixture::new("fits", "Fits").with_ages(8, 12).build(),
        CourseFixture::new("too-young", "Young").with_ages(4, 12).build(),
        CourseFixture::new("too-old", "Old").with_ages(8, 16).build(),
    ];
    let service = service_with(&docs).await;

    let result = service
        .search(&SearchRequest::new().with_age_range(Some(7), Some(12)))
        .await
        .unwrap();
    assert_eq!(ids(&result.documents), vec!["fits"]);
}

#[tokio::test]
async fn test_type_filter_is_exact() {
    let docs = vec![
        CourseFixture::new("club", "Club").with_type("CLUB").build(),
        CourseFixture::new("course", "Course").with_type("COURSE").build(),
    ];
    let service = service_with(&docs).await;

    let result = service
        .search(&SearchRequest::new().with_type("CLUB"))
        .await
        .unwrap();
    assert_eq!(ids(&result.documents), vec!["club"]);

    let none = service
        .search(&SearchRequest::new().with_type("club"))
        .await
        .unwrap();
    assert_eq!(none.total_hits, 0);
}

#[tokio::test]
async fn test_start_date_includes_same_day() {
    let docs = vec![
        CourseFixture::new("before", "Before")
            .with_session(session(2025, 5, 31))
            .build(),
        CourseFixture::new("same-day", "Same day")
            .with_session(session(2025, 6, 1))
            .build(),
        CourseFixture::new("after", "After")
            .with_session(session(2025, 6, 2))
            .build(),
    ];
    let service = service_with(&docs).await;

    let request =
        SearchRequest::new().with_start_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    let result = service.search(&request).await.unwrap();
    assert_eq!(ids(&result.documents), vec!["same-day", "after"]);
}

#[tokio::test]
async fn test_default_sort_is_upcoming() {
    let service = service_with(&ordering_catalog()).await;

    let result = service.search(&SearchRequest::new()).await.unwrap();
    assert_eq!(ids(&result.documents), vec!["d", "b", "c", "a"]);

    let unknown = service
        .search(&SearchRequest::new().with_sort("alphabetical"))
        .await
        .unwrap();
    assert_eq!(ids(&unknown.documents), ids(&result.documents));
}

#[tokio::test]
async fn test_price_orderings() {
    let service = service_with(&ordering_catalog()).await;

    let asc = service
        .search(&SearchRequest::new().with_sort("priceAsc"))
        .await
        .unwrap();
    assert!(asc.documents.windows(2).all(|w| w[0].price <= w[1].price));
    // Equal prices fall back to id order
    assert_eq!(ids(&asc.documents), vec!["b", "c", "d", "a"]);

    let desc = service
        .search(&SearchRequest::new().with_sort("priceDesc"))
        .await
        .unwrap();
    assert!(desc.documents.windows(2).all(|w| w[0].price >= w[1].price));
    assert_eq!(ids(&desc.documents), vec!["a", "c", "d", "b"]);
}

#[tokio::test]
async fn test_pages_partition_results() {
    let service = service_with(&ordering_catalog()).await;

    let mut seen = Vec::new();
    for page in 0..3 {
        let result = service
            .search(&SearchRequest::new().with_sort("priceAsc").with_page(page, 2))
            .await
            .unwrap();
        assert_eq!(result.total_hits, 4);
        assert!(result.documents.len() <= 2);
        seen.extend(result.documents.into_iter().map(|d| d.id));
    }
    assert_eq!(seen, vec!["b", "c", "d", "a"]);
}

#[tokio::test]
async fn test_invalid_window_is_rejected() {
    let service = service_with(&ordering_catalog()).await;

    for (page, size, parameter) in [(-1, 10, "page"), (0, 0, "size"), (0, -5, "size")] {
        let err = service
            .search(&SearchRequest::new().with_page(page, size))
            .await
            .unwrap_err();
        let StorageError::Validation(ValidationError::InvalidParameter { parameter: p, .. }) = err
        else {
            panic!("expected InvalidParameter, got {:?}", err);
        };
        assert_eq!(p, parameter);
    }
}

#[tokio::test]
async fn test_search_before_ingestion_is_empty() {
    let service = CourseSearchService::new(InMemoryStore::new(), "courses");
    let result = service.search(&SearchRequest::new()).await.unwrap();
    assert_eq!(result.total_hits, 0);
    assert!(result.documents.is_empty());
}
