//! User-facing query filters and their translation into a pipeline.

use data_loader::Year;
use serde::{Deserialize, Serialize};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, LanguageFilter, YearRangeFilter};

/// Optional restrictions on a by-title recommendation.
///
/// Empty sets and missing bounds mean "no restriction". Fields are AND'ed;
/// inside a set any single match is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilters {
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub year_from: Option<Year>,
    #[serde(default)]
    pub year_to: Option<Year>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl QueryFilters {
    /// No restrictions
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_genres<S: Into<String>>(mut self, genres: impl IntoIterator<Item = S>) -> Self {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years(mut self, from: Option<Year>, to: Option<Year>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    pub fn with_languages<S: Into<String>>(
        mut self,
        languages: impl IntoIterator<Item = S>,
    ) -> Self {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
            && self.year_from.is_none()
            && self.year_to.is_none()
            && self.languages.is_empty()
    }

    /// Build the pipeline: genre, then year, then language
    pub fn pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if !self.genres.is_empty() {
            pipeline = pipeline.add_filter(GenreFilter::new(self.genres.iter().cloned()));
        }
        if self.year_from.is_some() || self.year_to.is_some() {
            pipeline = pipeline.add_filter(YearRangeFilter::new(self.year_from, self.year_to));
        }
        if !self.languages.is_empty() {
            pipeline = pipeline.add_filter(LanguageFilter::new(self.languages.iter().cloned()));
        }
        pipeline
    }
}
