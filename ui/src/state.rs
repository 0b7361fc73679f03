use payloads::{Medium, requests::PostsQuery};

/// Years offered by the start and end year selectors.
pub const YEARS: [i32; 3] = [2021, 2022, 2023];

pub const DEFAULT_START_YEAR: i32 = 2021;
pub const DEFAULT_END_YEAR: i32 = 2023;

/// Upper year bound sent with every posts query.
// TODO: decide whether the end year selector should drive max_year instead.
pub const MAX_QUERY_YEAR: i32 = 2023;

/// Filter selections on the posts page. Lives only as long as the page;
/// reloading resets to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub medium: Medium,
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            medium: Medium::default(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
        }
    }
}

impl Filters {
    /// The posts query these selections describe. The end year is kept as
    /// a selection only; `max_year` is always [`MAX_QUERY_YEAR`].
    pub fn query(&self) -> PostsQuery {
        PostsQuery::new(
            self.medium.to_string(),
            self.start_year,
            MAX_QUERY_YEAR,
        )
    }

    pub fn with_medium(self, medium: Medium) -> Self {
        Self { medium, ..self }
    }

    pub fn with_start_year(self, start_year: i32) -> Self {
        Self { start_year, ..self }
    }

    pub fn with_end_year(self, end_year: i32) -> Self {
        Self { end_year, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let filters = Filters::default();
        assert_eq!(filters.medium, Medium::Switch);
        assert_eq!(
            filters.query(),
            PostsQuery::new("switch", 2021, 2023)
        );
    }

    #[test]
    fn medium_and_start_year_change_the_query() {
        let base = Filters::default();
        let changed = [
            base.with_medium(Medium::Movie),
            base.with_start_year(2022),
        ];
        for filters in changed {
            assert_ne!(filters.query(), base.query());
        }
    }

    #[test]
    fn end_year_does_not_change_max_year() {
        let filters = Filters::default().with_end_year(2022);
        assert_eq!(filters.end_year, 2022);

        let query = filters.query();
        assert_eq!(query.max_year, 2023);
        assert_eq!(
            query.to_query_string(),
            "medium=switch&min_year=2021&max_year=2023"
        );
        assert_eq!(query, Filters::default().query());
    }

    #[test]
    fn unchanged_selection_keeps_query_equal() {
        let filters = Filters::default();
        assert_eq!(
            filters.with_medium(Medium::Switch).query(),
            filters.query()
        );
    }

    #[test]
    fn offered_start_years_are_all_valid() {
        for year in YEARS {
            assert!(Filters::default().with_start_year(year).query().is_valid());
        }
    }

    #[test]
    fn defaults_are_offered_choices() {
        assert!(YEARS.contains(&DEFAULT_START_YEAR));
        assert!(YEARS.contains(&DEFAULT_END_YEAR));
        assert!(YEARS.contains(&MAX_QUERY_YEAR));
    }
}
