//! Record normalization: raw joined rows into [`MovieRecord`]s.
//!
//! The structured TMDB columns are JSON lists of objects. Anything that does
//! not decode becomes an empty list, and an unreadable release date becomes
//! year 0. A bad cell never aborts the corpus build.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{MovieId, MovieRecord, RawRecord, Year};

/// Number of billed cast members kept per movie
pub const MAX_CAST: usize = 3;

/// Crew job that marks a director
pub const DIRECTOR_JOB: &str = "Director";

#[derive(Debug, Deserialize)]
struct NamedEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CrewEntry {
    name: String,
    #[serde(default)]
    job: Option<String>,
}

/// Normalize one joined row
pub fn normalize_record(raw: &RawRecord) -> MovieRecord {
    let movie = &raw.movie;
    let title = movie.title.as_str();

    MovieRecord::builder(parse_id(movie.id.as_deref()), title)
        .overview(movie.overview.clone().unwrap_or_default())
        .genres(parse_names(title, "genres", movie.genres.as_deref()))
        .keywords(parse_names(title, "keywords", movie.keywords.as_deref()))
        .cast(parse_cast(title, raw.cast.as_deref()))
        .directors(parse_directors(title, raw.crew.as_deref()))
        .year(parse_year(movie.release_date.as_deref()))
        .language(parse_language(movie.original_language.as_deref()))
        .build()
}

/// Names of every entry, in source order
pub fn parse_names(title: &str, field: &str, raw: Option<&str>) -> Vec<String> {
    decode_list::<NamedEntry>(title, field, raw)
        .into_iter()
        .map(|entry| entry.name)
        .collect()
}

/// Names of the first [`MAX_CAST`] cast entries
pub fn parse_cast(title: &str, raw: Option<&str>) -> Vec<String> {
    decode_list::<NamedEntry>(title, "cast", raw)
        .into_iter()
        .take(MAX_CAST)
        .map(|entry| entry.name)
        .collect()
}

/// Names of every crew entry whose job is exactly [`DIRECTOR_JOB`]
pub fn parse_directors(title: &str, raw: Option<&str>) -> Vec<String> {
    decode_list::<CrewEntry>(title, "crew", raw)
        .into_iter()
        .filter(|entry| entry.job.as_deref() == Some(DIRECTOR_JOB))
        .map(|entry| entry.name)
        .collect()
}

/// Year from the leading four characters of a date such as "2010-07-14"
///
/// Returns 0 when the date is missing or does not start with a number.
pub fn parse_year(raw: Option<&str>) -> Year {
    raw.map(str::trim)
        .and_then(|date| date.get(..4))
        .and_then(|prefix| prefix.parse::<Year>().ok())
        .unwrap_or(0)
}

fn parse_id(raw: Option<&str>) -> MovieId {
    raw.and_then(|id| id.trim().parse().ok()).unwrap_or(0)
}

fn parse_language(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
}

fn decode_list<T: DeserializeOwned>(title: &str, field: &str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Unreadable {} for '{}', using empty list: {}", field, title, e);
            Vec::new()
        }
    }
}
