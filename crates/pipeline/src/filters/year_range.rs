//! Keep movies released within an inclusive year range.

use data_loader::{MovieRecord, Year};

use crate::traits::Filter;

/// Inclusive release-year filter; either bound may be open.
///
/// Movies with an unknown year (0) never pass, since there is nothing to
/// compare against the bounds.
pub struct YearRangeFilter {
    from: Option<Year>,
    to: Option<Year>,
}

impl YearRangeFilter {
    pub fn new(from: Option<Year>, to: Option<Year>) -> Self {
        Self { from, to }
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn keep(&self, movie: &MovieRecord) -> bool {
        if movie.year == 0 {
            return false;
        }
        self.from.is_none_or(|from| movie.year >= from) && self.to.is_none_or(|to| movie.year <= to)
    }
}
