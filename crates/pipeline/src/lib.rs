//! Pipeline for filtering ranked movie candidates.
//!
//! This crate provides:
//! - Candidate, a corpus index paired with its similarity score
//! - Filter trait and implementations (genre, year range, language)
//! - FilterPipeline for composing filters
//! - QueryFilters, the user-facing description of a filtered query
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{QueryFilters, candidate::from_ranked};
//!
//! let filters = QueryFilters::none()
//!     .with_genres(["Action"])
//!     .with_years(Some(1990), Some(2010));
//!
//! let ranked = from_ranked(similarity.ranked(seed));
//! let filtered = filters.pipeline().apply(ranked, &movies);
//! ```

pub mod candidate;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod query;

// Re-export main types
pub use candidate::Candidate;
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use query::QueryFilters;
