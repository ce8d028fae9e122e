//! # Vectorizer Crate
//!
//! Bag-of-words features and cosine similarity for movie tag blobs.
//!
//! ## Components
//!
//! ### Tokenizer
//! Lowercase word tokens with English stop words removed, plus the looser
//! whitespace tokenizer used for free-text queries.
//!
//! ### Vocabulary
//! Top-N most frequent terms across the corpus, one column each, and sparse
//! [`CountVector`]s of fixed dimension.
//!
//! ### Similarity
//! A square, symmetric cosine [`SimilarityMatrix`] over all vectors, built
//! once and read many times.
//!
//! ## Example Usage
//!
//! ```ignore
//! use vectorizer::{fit_transform, SimilarityMatrix, DEFAULT_MAX_FEATURES};
//!
//! let tags: Vec<String> = records.iter().map(|m| m.tags.clone()).collect();
//! let (vocabulary, vectors) = fit_transform(&tags, DEFAULT_MAX_FEATURES);
//! let similarity = SimilarityMatrix::build(&vectors);
//!
//! let best = similarity.ranked(0);
//! ```

// Public modules
pub mod stop_words;
pub mod tokenizer;
pub mod vocabulary;
pub mod similarity;

// Re-export commonly used types
pub use similarity::{SimilarityMatrix, cosine_similarity};
pub use stop_words::{ENGLISH_STOP_WORDS, is_stop_word};
pub use tokenizer::{query_tokens, word_tokens};
pub use vocabulary::{CountVector, DEFAULT_MAX_FEATURES, Vocabulary, fit_transform};
