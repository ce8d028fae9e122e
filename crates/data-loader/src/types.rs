//! Core domain types for the TMDB 5000 dataset.
//!
//! Two layers live here:
//! - raw CSV rows (`MovieRow`, `CreditsRow`) exactly as they come off disk,
//!   with the structured columns still serialized as JSON strings
//! - the normalized [`MovieRecord`] that every other crate works with

use serde::{Deserialize, Serialize};

use crate::tags::compose_tags;

// =============================================================================
// Type Aliases
// =============================================================================

/// TMDB movie identifier (the `id` column of the movies file)
pub type MovieId = u32;

/// Release year; 0 means the date was missing or unparseable
pub type Year = u16;

// =============================================================================
// Raw CSV rows
// =============================================================================

/// One row of `tmdb_5000_movies.csv`.
///
/// Only the columns the recommender needs are declared; the CSV reader
/// ignores the rest. Every column except `title` is optional so that a blank
/// cell degrades to `None` instead of failing the whole row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieRow {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    /// JSON list of `{"id": .., "name": ..}` objects
    #[serde(default)]
    pub genres: Option<String>,
    /// JSON list of `{"id": .., "name": ..}` objects
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
}

/// One row of `tmdb_5000_credits.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditsRow {
    pub title: String,
    /// JSON list of cast members, billing order
    #[serde(default)]
    pub cast: Option<String>,
    /// JSON list of crew members with `name` and `job`
    #[serde(default)]
    pub crew: Option<String>,
}

/// A movie row paired with its credits row after the title join
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub movie: MovieRow,
    pub cast: Option<String>,
    pub crew: Option<String>,
}

// =============================================================================
// MovieRecord
// =============================================================================

/// A normalized movie, immutable once the corpus is built.
///
/// `tags` is derived from the other fields by [`compose_tags`]; build records
/// through [`MovieBuilder`] so the two never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub genres: Vec<String>,
    pub keywords: Vec<String>,
    /// At most the first three billed cast members
    pub cast: Vec<String>,
    /// Crew members whose job is "Director", in credits order
    pub directors: Vec<String>,
    pub year: Year,
    /// ISO 639-1 code such as "en"
    pub language: Option<String>,
    /// Composite text used for vectorization and mood matching
    pub tags: String,
}

impl MovieRecord {
    /// Start building a record with the given id and title
    pub fn builder(id: MovieId, title: impl Into<String>) -> MovieBuilder {
        MovieBuilder::new(id, title)
    }

    /// Directors joined for display, empty when the crew lists none
    pub fn director_line(&self) -> String {
        self.directors.join(", ")
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// True when `name` is exactly one of the listed cast members or directors
    pub fn involves(&self, name: &str) -> bool {
        self.cast.iter().any(|c| c == name) || self.directors.iter().any(|d| d == name)
    }
}

/// Builder for [`MovieRecord`]; `build` composes the tag text last.
#[derive(Debug, Clone)]
pub struct MovieBuilder {
    id: MovieId,
    title: String,
    overview: String,
    genres: Vec<String>,
    keywords: Vec<String>,
    cast: Vec<String>,
    directors: Vec<String>,
    year: Year,
    language: Option<String>,
}

impl MovieBuilder {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            genres: Vec::new(),
            keywords: Vec::new(),
            cast: Vec::new(),
            directors: Vec::new(),
            year: 0,
            language: None,
        }
    }

    pub fn overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn genres<S: Into<String>>(mut self, genres: impl IntoIterator<Item = S>) -> Self {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn cast<S: Into<String>>(mut self, cast: impl IntoIterator<Item = S>) -> Self {
        self.cast = cast.into_iter().map(Into::into).collect();
        self
    }

    pub fn directors<S: Into<String>>(mut self, directors: impl IntoIterator<Item = S>) -> Self {
        self.directors = directors.into_iter().map(Into::into).collect();
        self
    }

    pub fn year(mut self, year: Year) -> Self {
        self.year = year;
        self
    }

    pub fn language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn build(self) -> MovieRecord {
        let tags = compose_tags(
            &self.overview,
            &self.genres,
            &self.keywords,
            &self.cast,
            &self.directors,
        );
        MovieRecord {
            id: self.id,
            title: self.title,
            overview: self.overview,
            genres: self.genres,
            keywords: self.keywords,
            cast: self.cast,
            directors: self.directors,
            year: self.year,
            language: self.language,
            tags,
        }
    }
}
