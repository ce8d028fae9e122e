//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to ranked candidates.

use data_loader::MovieRecord;

use crate::candidate::Candidate;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across query threads
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filters must keep the relative order of the candidates they retain
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single movie passes this filter
    fn keep(&self, movie: &MovieRecord) -> bool;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `movies` - The corpus the candidate indices point into
    ///
    /// Candidates whose index is outside `movies` are dropped.
    fn apply(&self, candidates: Vec<Candidate>, movies: &[MovieRecord]) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| {
                movies
                    .get(candidate.index)
                    .is_some_and(|movie| self.keep(movie))
            })
            .collect()
    }
}
