//! # Recommendation Engine
//!
//! Owns the corpus, its vocabulary and the similarity matrix, and answers
//! the four query types:
//! 1. `recommend`: nearest neighbours of a title, optionally filtered
//! 2. `surprise_me`: a random handful from one genre
//! 3. `search_by_person`: movies featuring an actor or director
//! 4. `recommend_by_mood`: a substring scan of the tag text
//!
//! Everything is built once in [`RecommendationEngine::build`] and never
//! mutated afterwards, so the engine can be shared across threads behind an
//! `Arc` and queried without locking.

use std::collections::BTreeSet;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use data_loader::{DatasetPaths, MovieRecord};
use pipeline::{Candidate, QueryFilters, candidate::from_ranked};
use vectorizer::{CountVector, SimilarityMatrix, Vocabulary, fit_transform, query_tokens};

use crate::config::EngineConfig;

/// One line of output: a title and its directors joined with ", "
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub director: String,
}

impl From<&MovieRecord> for Recommendation {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            title: movie.title.clone(),
            director: movie.director_line(),
        }
    }
}

/// Read-only recommendation engine over one corpus
#[derive(Debug)]
pub struct RecommendationEngine {
    config: EngineConfig,
    movies: Vec<MovieRecord>,
    /// Lowercased tag text, one per movie, for mood matching
    search_text: Vec<String>,
    vocabulary: Vocabulary,
    vectors: Vec<CountVector>,
    similarity: SimilarityMatrix,
}

impl RecommendationEngine {
    /// Load the TMDB files and build the engine
    pub fn load(paths: DatasetPaths<'_>, config: EngineConfig) -> Result<Self> {
        let movies = data_loader::load_records(paths).context("Failed to load TMDB dataset")?;
        Self::build(movies, config)
    }

    /// Build the engine from already-normalized movies
    ///
    /// Fails only when there are no movies at all.
    pub fn build(movies: Vec<MovieRecord>, config: EngineConfig) -> Result<Self> {
        if movies.is_empty() {
            bail!("Cannot build a recommendation engine from an empty corpus");
        }
        config.validate()?;
        let start = Instant::now();

        let tags: Vec<&str> = movies.iter().map(|m| m.tags.as_str()).collect();
        let (vocabulary, vectors) = fit_transform(&tags, config.max_features);
        info!(
            "Vectorized {} movies over {} terms",
            movies.len(),
            vocabulary.len()
        );

        let similarity = SimilarityMatrix::build(&vectors);
        let search_text = movies.iter().map(|m| m.tags.to_lowercase()).collect();

        info!("Engine ready in {:.2?}", start.elapsed());
        Ok(Self {
            config,
            movies,
            search_text,
            vocabulary,
            vectors,
            similarity,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Movies most similar to `title`, filtered, best first.
    ///
    /// Unknown titles give an empty list. The seed itself (and any other
    /// movie carrying the same title) is never returned.
    #[instrument(skip(self, filters))]
    pub fn recommend(&self, title: &str, filters: &QueryFilters) -> Vec<Recommendation> {
        let neighbours = self.neighbours(title);
        if neighbours.is_empty() {
            return Vec::new();
        }

        let filtered = filters.pipeline().apply(neighbours, &self.movies);
        filtered
            .into_iter()
            .take(self.config.result_limit)
            .map(|c| self.recommendation(c.index))
            .collect()
    }

    /// The top `candidate_pool` neighbours of `title` before any filtering
    ///
    /// Ties keep corpus order.
    pub fn neighbours(&self, title: &str) -> Vec<Candidate> {
        let Some(seed) = self.find_title(title) else {
            debug!("No movie titled '{}'", title);
            return Vec::new();
        };

        let ranked = self
            .similarity
            .ranked(seed)
            .into_iter()
            .filter(|&(index, _)| index != seed && self.movies[index].title != title)
            .take(self.config.candidate_pool);
        from_ranked(ranked)
    }

    /// A random sample from `genre`, using the thread-local RNG
    pub fn surprise_me(&self, genre: &str) -> Vec<Recommendation> {
        self.surprise_me_with(genre, &mut rand::rng())
    }

    /// Uniform sample without replacement of up to `surprise_count` movies
    /// whose genres include `genre` exactly
    #[instrument(skip(self, rng))]
    pub fn surprise_me_with<R: Rng + ?Sized>(&self, genre: &str, rng: &mut R) -> Vec<Recommendation> {
        let pool: Vec<&MovieRecord> = self.movies.iter().filter(|m| m.has_genre(genre)).collect();
        let count = self.config.surprise_count.min(pool.len());
        debug!("Sampling {} of {} '{}' movies", count, pool.len(), genre);

        pool.choose_multiple(rng, count)
            .map(|movie| Recommendation::from(*movie))
            .collect()
    }

    /// Movies whose cast or directors include `name` exactly, corpus order
    #[instrument(skip(self))]
    pub fn search_by_person(&self, name: &str) -> Vec<Recommendation> {
        self.movies
            .iter()
            .filter(|m| m.involves(name))
            .take(self.config.person_limit)
            .map(Recommendation::from)
            .collect()
    }

    /// Movies whose tag text contains any non-stop-word of `text`.
    ///
    /// This is a plain substring scan in corpus order, unranked and case
    /// insensitive. A token can match inside a longer word ("war" in "award").
    #[instrument(skip(self))]
    pub fn recommend_by_mood(&self, text: &str) -> Vec<Recommendation> {
        let tokens = query_tokens(text);
        if tokens.is_empty() {
            return Vec::new();
        }

        self.search_text
            .iter()
            .enumerate()
            .filter(|(_, tags)| tokens.iter().any(|token| tags.contains(token.as_str())))
            .take(self.config.mood_limit)
            .map(|(index, _)| self.recommendation(index))
            .collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Distinct titles, sorted
    pub fn all_titles(&self) -> Vec<String> {
        self.movies
            .iter()
            .map(|m| m.title.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct genres across the corpus, sorted
    pub fn all_genres(&self) -> Vec<String> {
        self.movies
            .iter()
            .flat_map(|m| m.genres.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Corpus position of the first movie titled exactly `title`
    pub fn find_title(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Count vector of the movie at `index`
    pub fn vector(&self, index: usize) -> Option<&CountVector> {
        self.vectors.get(index)
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    fn recommendation(&self, index: usize) -> Recommendation {
        Recommendation::from(&self.movies[index])
    }
}
