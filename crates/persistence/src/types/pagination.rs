//! Pagination types for search results.
//!
//! Requests address pages by a zero-based index and a size; stores consume
//! the equivalent `{offset, limit}` window.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A bounded result window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Number of matching documents to skip.
    pub offset: u64,
    /// Maximum number of documents to return.
    pub limit: u64,
}

impl PageWindow {
    /// Builds the window for `page` (zero-based) and `size`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidParameter`] if `page` is negative,
    /// `size` is not positive, or the resulting offset overflows.
    pub fn new(page: i64, size: i64) -> Result<Self, ValidationError> {
        if page < 0 {
            return Err(ValidationError::invalid_parameter(
                "page",
                format!("must be >= 0, got {}", page),
            ));
        }
        if size <= 0 {
            return Err(ValidationError::invalid_parameter(
                "size",
                format!("must be > 0, got {}", size),
            ));
        }

        let offset = page.checked_mul(size).ok_or_else(|| {
            ValidationError::invalid_parameter(
                "page",
                format!("page {} with size {} is out of range", page, size),
            )
        })?;

        Ok(Self {
            offset: offset as u64,
            limit: size as u64,
        })
    }

    /// Returns the zero-based page index this window addresses.
    pub fn page(&self) -> u64 {
        self.offset.checked_div(self.limit).unwrap_or(0)
    }
}
