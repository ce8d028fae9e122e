//! Tokenizers for the two text paths.
//!
//! - [`word_tokens`] feeds the vocabulary: lowercase, runs of two or more
//!   word characters, stop words removed.
//! - [`query_tokens`] feeds mood matching: lowercase, whitespace split, stop
//!   words removed. Punctuation stays attached, which is what the substring
//!   scan expects.

use std::sync::LazyLock;

use regex::Regex;

use crate::stop_words::is_stop_word;

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\w\w+\b").expect("word pattern is a valid regex")
});

/// Vocabulary tokens of `text`, in order of appearance
pub fn word_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Free-text query tokens, in order of appearance
pub fn query_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}
