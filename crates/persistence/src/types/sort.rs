//! Sort strategy selection.

use serde::{Deserialize, Serialize};

use super::course::CourseField;

/// Keyword selecting [`SortStrategy::PriceAscending`].
pub const PRICE_ASC: &str = "priceAsc";

/// Keyword selecting [`SortStrategy::PriceDescending`].
pub const PRICE_DESC: &str = "priceDesc";

/// Keyword documented as the default (`"upcoming"`).
pub const UPCOMING: &str = "upcoming";

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns `"asc"` or `"desc"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The ordering applied to a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortStrategy {
    /// Cheapest first.
    PriceAscending,
    /// Most expensive first.
    PriceDescending,
    /// Soonest session first.
    #[default]
    NextSessionDateAscending,
}

impl SortStrategy {
    /// Maps a sort keyword to a strategy.
    ///
    /// Only the exact keywords `"priceAsc"` and `"priceDesc"` select a price
    /// ordering. Every other value, including `"upcoming"`, the empty string
    /// and unrecognized input, resolves to [`SortStrategy::NextSessionDateAscending`].
    /// Unknown keywords are not an error.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            PRICE_ASC => SortStrategy::PriceAscending,
            PRICE_DESC => SortStrategy::PriceDescending,
            UPCOMING | "" => SortStrategy::NextSessionDateAscending,
            other => {
                tracing::debug!(keyword = %other, "Unrecognized sort keyword, using default order");
                SortStrategy::NextSessionDateAscending
            }
        }
    }

    /// The field the strategy orders by.
    pub fn field(self) -> CourseField {
        match self {
            SortStrategy::PriceAscending | SortStrategy::PriceDescending => CourseField::Price,
            SortStrategy::NextSessionDateAscending => CourseField::NextSessionDate,
        }
    }

    /// The direction of the primary ordering.
    pub fn direction(self) -> SortDirection {
        match self {
            SortStrategy::PriceDescending => SortDirection::Descending,
            SortStrategy::PriceAscending | SortStrategy::NextSessionDateAscending => {
                SortDirection::Ascending
            }
        }
    }

    /// The field used to break ties between equal primary keys (always ascending).
    pub fn tie_breaker(self) -> CourseField {
        CourseField::Id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_keywords() {
        assert_eq!(SortStrategy::from_keyword("priceAsc"), SortStrategy::PriceAscending);
        assert_eq!(SortStrategy::from_keyword("priceDesc"), SortStrategy::PriceDescending);
        assert_eq!(
            SortStrategy::from_keyword("upcoming"),
            SortStrategy::NextSessionDateAscending
        );
    }

    #[test]
    fn test_unknown_keywords_fall_back() {
        for keyword in ["", "PRICEASC", "priceasc", "price", "newest", " priceAsc"] {
            assert_eq!(
                SortStrategy::from_keyword(keyword),
                SortStrategy::NextSessionDateAscending,
                "keyword {:?}",
                keyword
            );
        }
    }

    #[test]
    fn test_field_and_direction() {
        assert_eq!(SortStrategy::PriceDescending.field(), CourseField::Price);
        assert_eq!(SortStrategy::PriceDescending.direction(), SortDirection::Descending);
        assert_eq!(SortStrategy::default().field(), CourseField::NextSessionDate);
        assert_eq!(SortStrategy::default().direction().as_str(), "asc");
    }
}
