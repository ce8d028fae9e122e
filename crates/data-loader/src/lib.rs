//! # Data Loader Crate
//!
//! This crate turns the TMDB 5000 movies and credits files into an ordered
//! list of normalized [`MovieRecord`]s.
//!
//! ## Main Components
//!
//! - **types**: raw CSV rows and the normalized `MovieRecord`
//! - **parser**: CSV decoding and the inner join on title
//! - **normalize**: JSON attribute lists to names, directors, release year
//! - **tags**: the composite text blob used for vectorization
//! - **index**: the end-to-end `load_records` entry point
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load_records, DatasetPaths};
//! use std::path::Path;
//!
//! let records = load_records(DatasetPaths {
//!     movies: Path::new("data/tmdb_5000_movies.csv"),
//!     credits: Path::new("data/tmdb_5000_credits.csv"),
//! })?;
//!
//! println!("Loaded {} movies", records.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod normalize;
pub mod tags;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::{DatasetPaths, load_records, normalize_all};
pub use normalize::normalize_record;
pub use tags::compose_tags;
pub use types::{
    // Type aliases
    MovieId,
    Year,
    // Core types
    CreditsRow,
    MovieBuilder,
    MovieRecord,
    MovieRow,
    RawRecord,
};
