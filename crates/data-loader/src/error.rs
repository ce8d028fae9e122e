//! Error types for the data-loader crate.
//!
//! Only failures that make the corpus unusable live here. Per-field problems
//! inside a row (a genre list that is not valid JSON, a garbled release date)
//! are recovered in [`crate::normalize`] and never reach this enum.

use thiserror::Error;

/// Errors that can occur while loading the TMDB dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader failed outside of a specific record (e.g. bad header row)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV record couldn't be decoded
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// The join of the two files produced no movies
    #[error("No movies left after joining {movies} movie rows with {credits} credit rows")]
    EmptyCorpus { movies: usize, credits: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
