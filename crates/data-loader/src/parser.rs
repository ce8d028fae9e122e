//! Parser for the TMDB 5000 CSV files.
//!
//! - tmdb_5000_movies.csv: one row per movie, structured columns as JSON
//! - tmdb_5000_credits.csv: movie_id,title,cast,crew
//!
//! Rows are decoded with serde through the `csv` crate. A row that the CSV
//! layer itself cannot decode is a hard error (the file is damaged); a cell
//! whose JSON payload is bad is left for the normalizer to recover.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{DataLoadError, Result};
use crate::types::{CreditsRow, MovieRow, RawRecord};

/// Parse the movies file
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRow>> {
    read_rows(path)
}

/// Parse the credits file
pub fn parse_credits(path: &Path) -> Result<Vec<CreditsRow>> {
    read_rows(path)
}

/// Inner join of movies and credits on the exact title.
///
/// Each movie row is paired with every credits row that carries the same
/// title, so the output keeps the movies file order. Rows without a partner
/// on the other side are dropped.
pub fn join_on_title(movies: Vec<MovieRow>, credits: Vec<CreditsRow>) -> Vec<RawRecord> {
    let mut by_title: HashMap<String, Vec<CreditsRow>> = HashMap::new();
    for row in credits {
        by_title.entry(row.title.clone()).or_default().push(row);
    }

    let mut joined = Vec::with_capacity(movies.len());
    for movie in movies {
        let Some(matches) = by_title.get(&movie.title) else {
            continue;
        };
        for credit in matches {
            joined.push(RawRecord {
                movie: movie.clone(),
                cast: credit.cast.clone(),
                crew: credit.crew.clone(),
            });
        }
    }
    joined
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = open(path)?;
    let file_name = file_label(path);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(file);

    // Header failures (e.g. non-UTF-8 column names) surface as `Csv`
    reader.headers()?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        let row = result.map_err(|e| DataLoadError::ParseError {
            file: file_name.clone(),
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}

fn open(path: &Path) -> Result<impl Read> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(File::open(path)?)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
