//! Analyzer configuration
//!
//! Loaded from an optional JSON file; every field has a default so a partial
//! file (or none at all) is valid. Command-line flags layer on top in the
//! binary.

use crate::errors::ScorerError;
use crate::filter::DEFAULT_MIN_GAMES;
use crate::metrics::PositionBlend;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Minimum games played for a record to be scored
    pub min_games: u32,
    /// Number of top players to report
    pub top_n: usize,
    /// Combination rule for multi-position labels
    pub position_blend: PositionBlend,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_games: DEFAULT_MIN_GAMES,
            top_n: DEFAULT_TOP_N,
            position_blend: PositionBlend::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AnalyzerConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScorerError> {
        if self.top_n == 0 {
            return Err(ScorerError::InvalidConfig(
                "top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.min_games, 20);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.position_blend, PositionBlend::Precedence);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{ "min_games": 41 }"#).unwrap();
        assert_eq!(config.min_games, 41);
        assert_eq!(config.top_n, 10);

        let config: AnalyzerConfig =
            serde_json::from_str(r#"{ "position_blend": "average", "top_n": 5 }"#).unwrap();
        assert_eq!(config.position_blend, PositionBlend::Average);
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_load_rejects_zero_top_n() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "top_n": 0 }}"#).unwrap();

        let err = AnalyzerConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("top_n"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = AnalyzerConfig::load(Path::new("/nonexistent/mvp_config.json"));
        assert!(result.is_err());
    }
}
