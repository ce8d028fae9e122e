//! Engine tuning knobs.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "max_features": 3000, "mood_limit": 20 }
//! ```

use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use vectorizer::DEFAULT_MAX_FEATURES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Vocabulary size cap
    pub max_features: usize,
    /// Nearest neighbours considered by `recommend` before filtering
    pub candidate_pool: usize,
    /// Results returned by `recommend`
    pub result_limit: usize,
    /// Movies drawn by `surprise_me`
    pub surprise_count: usize,
    /// Results returned by `search_by_person`
    pub person_limit: usize,
    /// Results returned by `recommend_by_mood`
    pub mood_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            candidate_pool: 19,
            result_limit: 5,
            surprise_count: 5,
            person_limit: 5,
            mood_limit: 10,
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_features > 0, "max_features must be positive");
        ensure!(self.candidate_pool > 0, "candidate_pool must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_features, 5000);
        assert_eq!(config.candidate_pool, 19);
        assert_eq!(config.result_limit, 5);
        assert_eq!(config.mood_limit, 10);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_features": 300, "mood_limit": 3}}"#).unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_features, 300);
        assert_eq!(config.mood_limit, 3);
        assert_eq!(config.result_limit, 5);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_features": 0}}"#).unwrap();
        assert!(EngineConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file(Path::new("no/such/config.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
