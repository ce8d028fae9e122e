//! Corpus loading: files on disk to an ordered list of normalized records.
//!
//! Steps:
//! 1. Parse both CSV files in parallel
//! 2. Inner join on title
//! 3. Normalize every joined row in parallel (order preserved)
//! 4. Reject an empty result, since nothing downstream can work without movies

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::error::{DataLoadError, Result};
use crate::normalize::normalize_record;
use crate::parser;
use crate::types::{MovieRecord, RawRecord};

/// Locations of the two TMDB files
#[derive(Debug, Clone)]
pub struct DatasetPaths<'a> {
    pub movies: &'a Path,
    pub credits: &'a Path,
}

/// Load, join and normalize the dataset
pub fn load_records(paths: DatasetPaths<'_>) -> Result<Vec<MovieRecord>> {
    let start = Instant::now();
    info!(
        "Loading TMDB dataset from {:?} and {:?}",
        paths.movies, paths.credits
    );

    // Rayon's `join` runs both parsers at once
    let (movies, credits) = rayon::join(
        || parser::parse_movies(paths.movies),
        || parser::parse_credits(paths.credits),
    );
    let movies = movies?;
    let credits = credits?;
    let (movie_count, credit_count) = (movies.len(), credits.len());
    info!("Parsed {} movie rows, {} credit rows", movie_count, credit_count);

    let joined = parser::join_on_title(movies, credits);
    if joined.is_empty() {
        return Err(DataLoadError::EmptyCorpus {
            movies: movie_count,
            credits: credit_count,
        });
    }

    let records = normalize_all(&joined);
    info!(
        "Normalized {} movies in {:.2?}",
        records.len(),
        start.elapsed()
    );
    Ok(records)
}

/// Normalize joined rows; `par_iter().collect()` keeps input order
pub fn normalize_all(raw: &[RawRecord]) -> Vec<MovieRecord> {
    raw.par_iter().map(normalize_record).collect()
}
