//! Keep movies whose original language is in the requested set.

use std::collections::HashSet;

use data_loader::MovieRecord;

use crate::traits::Filter;

/// Membership filter on the original-language code
pub struct LanguageFilter {
    languages: HashSet<String>,
}

impl LanguageFilter {
    pub fn new<S: Into<String>>(languages: impl IntoIterator<Item = S>) -> Self {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn keep(&self, movie: &MovieRecord) -> bool {
        movie
            .language
            .as_ref()
            .is_some_and(|code| self.languages.contains(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_membership() {
        let filter = LanguageFilter::new(["en", "ja"]);
        let lang = |code: Option<&str>| {
            MovieRecord::builder(1, "Movie")
                .language(code.map(str::to_string))
                .build()
        };

        assert!(filter.keep(&lang(Some("ja"))));
        assert!(!filter.keep(&lang(Some("fr"))));
        assert!(!filter.keep(&lang(None)));
    }
}
