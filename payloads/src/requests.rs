use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::Medium;

/// Earliest year the backend accepts in a posts query.
pub const MIN_QUERY_YEAR: i32 = 1900;

/// Filter parameters for listing posts.
///
/// The medium is carried as text and is not validated before sending; the
/// backend rejects values it does not know.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostsQuery {
    pub medium: String,
    pub min_year: i32,
    pub max_year: i32,
}

impl PostsQuery {
    pub fn new(medium: impl Into<String>, min_year: i32, max_year: i32) -> Self {
        Self {
            medium: medium.into(),
            min_year,
            max_year,
        }
    }

    /// Query string for the posts endpoint. Values are interpolated as-is,
    /// without percent-encoding.
    pub fn to_query_string(&self) -> String {
        format!(
            "medium={}&min_year={}&max_year={}",
            self.medium, self.min_year, self.max_year
        )
    }

    /// Whether the backend would accept this query.
    pub fn is_valid(&self) -> bool {
        self.medium.parse::<Medium>().is_ok()
            && self.min_year >= MIN_QUERY_YEAR
            && self.max_year >= MIN_QUERY_YEAR
            && self.min_year <= self.max_year
    }

    /// Inclusive release date bounds covered by the query: the first day of
    /// `min_year` through the last day of `max_year`. `None` if either year
    /// is outside the supported calendar range.
    pub fn date_range(&self) -> Option<(Date, Date)> {
        let lower = Date::new(i16::try_from(self.min_year).ok()?, 1, 1).ok()?;
        let upper =
            Date::new(i16::try_from(self.max_year).ok()?, 12, 31).ok()?;
        Some((lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn query_string_interpolates_raw_values() {
        let query = PostsQuery::new("switch", 2021, 2023);
        assert_eq!(
            query.to_query_string(),
            "medium=switch&min_year=2021&max_year=2023"
        );

        // no encoding is applied
        let query = PostsQuery::new("a b&c", -1, 99999);
        assert_eq!(
            query.to_query_string(),
            "medium=a b&c&min_year=-1&max_year=99999"
        );
    }

    #[test]
    fn validity_follows_backend_rules() {
        assert!(PostsQuery::new("tv", 2021, 2023).is_valid());
        assert!(PostsQuery::new("movie", 2022, 2022).is_valid());
        assert!(!PostsQuery::new("game", 2021, 2023).is_valid());
        assert!(!PostsQuery::new("pc", 1899, 2023).is_valid());
        assert!(!PostsQuery::new("pc", 2023, 2021).is_valid());
    }

    #[test]
    fn date_range_spans_whole_years() {
        let query = PostsQuery::new("pc", 2021, 2023);
        assert_eq!(
            query.date_range(),
            Some((date(2021, 1, 1), date(2023, 12, 31)))
        );
    }

    #[test]
    fn date_range_out_of_calendar_is_none() {
        assert_eq!(PostsQuery::new("pc", 2021, 100_000).date_range(), None);
    }
}
