//! Engine crate for the content-based movie recommender.
//!
//! This crate wires the data loader, the vectorizer and the filter pipeline
//! into one read-only [`RecommendationEngine`].
//!
//! ## Example Usage
//! ```ignore
//! use engine::{EngineConfig, RecommendationEngine};
//! use data_loader::DatasetPaths;
//! use pipeline::QueryFilters;
//!
//! let engine = RecommendationEngine::load(paths, EngineConfig::default())?;
//! let picks = engine.recommend("Inception", &QueryFilters::none().with_genres(["Action"]));
//! ```

pub mod config;
pub mod engine;

pub use config::EngineConfig;
pub use engine::{Recommendation, RecommendationEngine};
pub use pipeline::QueryFilters;
