//! Keep movies that share at least one genre with the requested set.

use std::collections::HashSet;

use data_loader::MovieRecord;

use crate::traits::Filter;

/// Any-match genre filter.
///
/// Genre names are compared exactly ("Science Fiction" is not "science fiction").
pub struct GenreFilter {
    genres: HashSet<String>,
}

impl GenreFilter {
    pub fn new<S: Into<String>>(genres: impl IntoIterator<Item = S>) -> Self {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn keep(&self, movie: &MovieRecord) -> bool {
        movie.genres.iter().any(|genre| self.genres.contains(genre))
    }
}
