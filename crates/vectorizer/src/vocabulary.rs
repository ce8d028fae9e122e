//! Vocabulary fitting and count vectors.
//!
//! ## Term selection
//! 1. Tokenize every document with [`word_tokens`]
//! 2. Count total occurrences of each term across the corpus
//! 3. Rank by count (descending), ties by first appearance (document order,
//!    then position inside the document)
//! 4. Keep the top `max_features`
//! 5. Assign columns in alphabetical order of the kept terms
//!
//! Every step is deterministic, so fitting the same corpus twice yields the
//! same columns.

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use tracing::debug;

use crate::tokenizer::word_tokens;

/// Default cap on vocabulary size
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Sparse term-count vector with a fixed dimension.
///
/// Only non-zero columns are stored, sorted by column. Logically it is a dense
/// vector of length [`CountVector::dim`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountVector {
    dim: usize,
    entries: Vec<(usize, u32)>,
}

impl CountVector {
    /// All-zero vector of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    fn from_counts(dim: usize, counts: BTreeMap<usize, u32>) -> Self {
        Self {
            dim,
            entries: counts.into_iter().collect(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Count at `column`, zero for absent or out-of-range columns
    pub fn get(&self, column: usize) -> u32 {
        self.entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Non-zero `(column, count)` pairs in column order
    pub fn entries(&self) -> &[(usize, u32)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_dense(&self) -> Vec<u32> {
        let mut dense = vec![0; self.dim];
        for &(column, count) in &self.entries {
            dense[column] = count;
        }
        dense
    }

    pub fn dot(&self, other: &CountVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, va) = self.entries[i];
            let (cb, vb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += va as f64 * vb as f64;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, v)| (v as f64) * (v as f64))
            .sum::<f64>()
            .sqrt()
    }
}

/// Term to column mapping, fixed once fitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    columns: HashMap<String, usize>,
}

impl Vocabulary {
    /// Fit a vocabulary of at most `max_features` terms over `documents`
    pub fn fit<S: AsRef<str>>(documents: &[S], max_features: usize) -> Self {
        // term -> (total count, first-seen rank)
        let mut stats: HashMap<String, (u64, usize)> = HashMap::new();
        let mut seen = 0usize;
        for doc in documents {
            for token in word_tokens(doc.as_ref()) {
                let entry = stats.entry(token).or_insert_with(|| {
                    seen += 1;
                    (0, seen)
                });
                entry.0 += 1;
            }
        }
        let distinct = stats.len();

        let mut ranked: Vec<(String, u64, usize)> = stats
            .into_iter()
            .map(|(term, (count, first))| (term, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(max_features);

        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _, _)| term).collect();
        terms.sort();
        let columns = terms
            .iter()
            .enumerate()
            .map(|(column, term)| (term.clone(), column))
            .collect();

        debug!(
            "Fitted vocabulary: kept {} of {} distinct terms",
            terms.len(),
            distinct
        );
        Self { terms, columns }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column of `term`, if it made the cut
    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    /// Term at `column`
    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    /// All terms in column order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Count vector for one text; terms outside the vocabulary are ignored
    pub fn transform(&self, text: &str) -> CountVector {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for token in word_tokens(text) {
            if let Some(column) = self.column(&token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }
        CountVector::from_counts(self.len(), counts)
    }

    /// Count vectors for many texts, computed in parallel, input order kept
    pub fn transform_all<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<CountVector> {
        documents
            .par_iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect()
    }
}

/// Fit a vocabulary and vectorize the same documents with it
pub fn fit_transform<S: AsRef<str> + Sync>(
    documents: &[S],
    max_features: usize,
) -> (Vocabulary, Vec<CountVector>) {
    let vocabulary = Vocabulary::fit(documents, max_features);
    let vectors = vocabulary.transform_all(documents);
    (vocabulary, vectors)
}
