//! Ranked candidates flowing through the filter pipeline.

use serde::{Deserialize, Serialize};

/// A neighbour of the seed movie: its corpus position and similarity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub index: usize,
    pub score: f32,
}

impl Candidate {
    pub fn new(index: usize, score: f32) -> Self {
        Self { index, score }
    }
}

/// Wrap `(index, score)` pairs, e.g. a ranked similarity row
pub fn from_ranked(ranked: impl IntoIterator<Item = (usize, f32)>) -> Vec<Candidate> {
    ranked
        .into_iter()
        .map(|(index, score)| Candidate::new(index, score))
        .collect()
}
