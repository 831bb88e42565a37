//! Error and warning types for the MVP pipeline
//!
//! Fatal conditions stop a run before scoring starts and are surfaced as
//! `ScorerError`. Soft conditions are absorbed by the normalizer and the
//! scorer and recorded on the ranking as `ScoringWarning`s.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::metrics::MetricKind;

/// Fatal pipeline errors
#[derive(Debug, Error)]
pub enum ScorerError {
    /// The source table could not be supplied (file absent or unreadable)
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// A required column is absent from a non-empty table
    #[error("required column '{column}' is missing from input (available: {available:?})")]
    Schema {
        column: String,
        available: Vec<String>,
    },

    /// Configuration values that cannot drive a run
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Soft conditions recovered locally during scoring
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringWarning {
    /// A calculator produced the same raw value for every record
    DegenerateRange { metric: MetricKind, value: f64 },
    /// No record met the games threshold
    EmptyPopulation { min_games: u32 },
}

impl fmt::Display for ScoringWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringWarning::DegenerateRange { metric, value } => write!(
                f,
                "{} has a degenerate range (every raw value is {:.4}); normalized to 0",
                metric, value
            ),
            ScoringWarning::EmptyPopulation { min_games } => write!(
                f,
                "no players with {}+ games; ranking is empty",
                min_games
            ),
        }
    }
}
