//! Pairwise cosine similarity.
//!
//! The matrix is built once from the corpus vectors. Only the upper triangle
//! is computed (rows in parallel) and mirrored, so `get(i, j) == get(j, i)`
//! holds bit for bit. Zero vectors have similarity 0 to everything,
//! themselves included.

use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::vocabulary::CountVector;

/// Cosine similarity of two count vectors, in [0, 1]
///
/// Returns 0 when either vector is all zeros.
pub fn cosine_similarity(a: &CountVector, b: &CountVector) -> f32 {
    cosine_from_parts(a.dot(b), a.norm(), b.norm())
}

fn cosine_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0) as f32
}

/// Square, symmetric, read-only similarity matrix (row-major)
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the similarity of every pair of vectors
    pub fn build(vectors: &[CountVector]) -> Self {
        let start = Instant::now();
        let size = vectors.len();
        let norms: Vec<f64> = vectors.par_iter().map(CountVector::norm).collect();

        // Row i holds scores for columns i+1..size
        let upper: Vec<Vec<f32>> = (0..size)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..size)
                    .map(|j| cosine_from_parts(vectors[i].dot(&vectors[j]), norms[i], norms[j]))
                    .collect()
            })
            .collect();

        let mut scores = vec![0.0f32; size * size];
        for (i, row) in upper.iter().enumerate() {
            scores[i * size + i] = if norms[i] > 0.0 { 1.0 } else { 0.0 };
            for (offset, &score) in row.iter().enumerate() {
                let j = i + 1 + offset;
                scores[i * size + j] = score;
                scores[j * size + i] = score;
            }
        }

        info!(
            "Built {}x{} similarity matrix in {:.2?}",
            size,
            size,
            start.elapsed()
        );
        Self { size, scores }
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Scores of movie `i` against every movie
    ///
    /// # Panics
    /// If `i` is out of range.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.scores[i * self.size..(i + 1) * self.size]
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.scores[i * self.size + j]
    }

    /// Row `i` as `(index, score)` pairs, best first.
    ///
    /// The sort is stable, so equal scores stay in corpus order.
    pub fn ranked(&self, i: usize) -> Vec<(usize, f32)> {
        let mut ranked: Vec<(usize, f32)> = self.row(i).iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
