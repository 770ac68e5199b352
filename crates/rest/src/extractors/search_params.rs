//! Search parameters extractor.
//!
//! Parses the `/api/search` query string into a typed
//! [`SearchRequest`]. Parameters that are absent or empty are treated as
//! unset; numbers and dates that fail to parse are rejected with 400.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use chrono::NaiveDate;
use course_persistence::types::{DEFAULT_PAGE, SearchRequest};
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::RestError;

/// Query parameter names.
pub mod names {
    /// Full-text query.
    pub const QUERY: &str = "q";
    /// Lower age bound.
    pub const MIN_AGE: &str = "minAge";
    /// Upper age bound.
    pub const MAX_AGE: &str = "maxAge";
    /// Category keyword.
    pub const CATEGORY: &str = "category";
    /// Course type keyword.
    pub const TYPE: &str = "type";
    /// Lower price bound.
    pub const MIN_PRICE: &str = "minPrice";
    /// Upper price bound.
    pub const MAX_PRICE: &str = "maxPrice";
    /// Earliest next session date.
    pub const START_DATE: &str = "startDate";
    /// Sort keyword.
    pub const SORT: &str = "sort";
    /// Zero-based page index.
    pub const PAGE: &str = "page";
    /// Page size.
    pub const SIZE: &str = "size";
}

/// Axum extractor for course search parameters.
///
/// # Example
///
/// ```rust,ignore
/// use course_rest::extractors::SearchParams;
///
/// async fn search_handler(params: SearchParams) {
///     let request = params.into_request(10, 100);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    request: SearchRequest,
}

fn value<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn parse<T: FromStr>(
    params: &HashMap<String, String>,
    name: &str,
    expected: &str,
) -> Result<Option<T>, RestError> {
    value(params, name)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| RestError::BadRequest {
                message: format!(
                    "invalid parameter '{}': expected {}, got '{}'",
                    name, expected, raw
                ),
            })
        })
        .transpose()
}

fn parse_date(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<Option<NaiveDate>, RestError> {
    value(params, name)
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| RestError::BadRequest {
                message: format!(
                    "invalid parameter '{}': expected a date (YYYY-MM-DD), got '{}'",
                    name, raw
                ),
            })
        })
        .transpose()
}

impl SearchParams {
    /// Parses search parameters from a query map.
    ///
    /// Unknown parameters are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::BadRequest`] when an age, price, page, size, or
    /// date value cannot be parsed.
    pub fn from_map(params: &HashMap<String, String>) -> Result<Self, RestError> {
        let request = SearchRequest {
            q: params.get(names::QUERY).cloned(),
            min_age: parse(params, names::MIN_AGE, "an integer")?,
            max_age: parse(params, names::MAX_AGE, "an integer")?,
            category: value(params, names::CATEGORY).map(String::from),
            course_type: value(params, names::TYPE).map(String::from),
            min_price: parse(params, names::MIN_PRICE, "a number")?,
            max_price: parse(params, names::MAX_PRICE, "a number")?,
            start_date: parse_date(params, names::START_DATE)?,
            sort: value(params, names::SORT).map(String::from),
            page: parse(params, names::PAGE, "an integer")?,
            size: parse(params, names::SIZE, "an integer")?,
        };

        Ok(Self { request })
    }

    /// Returns the parsed request as given, without page-size defaults.
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    /// Returns the request with server page-size rules applied.
    ///
    /// A missing page becomes page 0, a missing size becomes
    /// `default_size`, and sizes above `max_size` are capped. Non-positive
    /// sizes pass through so that validation can reject them.
    pub fn into_request(self, default_size: usize, max_size: usize) -> SearchRequest {
        let mut request = self.request;
        let max_size = i64::try_from(max_size).unwrap_or(i64::MAX);
        let default_size = i64::try_from(default_size).unwrap_or(max_size);

        let size = request.size.unwrap_or(default_size).min(max_size);
        let page = request.page.unwrap_or(DEFAULT_PAGE);
        request.page = Some(page);
        request.size = Some(size);
        request
    }
}

impl<S> FromRequestParts<S> for SearchParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: format!("Invalid query parameters: {}", e),
            })?;

        SearchParams::from_map(&params)
    }
}
