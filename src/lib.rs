//! MVP Scorer Rust Implementation
//!
//! Ranks basketball players from season per-game statistics by blending four
//! independent scores into one composite.
//!
//! Layout:
//! - `data`: CSV loading with Polars into typed rows
//! - `filter`: games threshold and zero-fill
//! - `metrics/`: the four calculators (M1-M4)
//! - `utils/`: weights, min-max normalization, team aggregates
//! - `scorer`: pipeline coordinator and ranker
//! - `export/`: CSV, JSON and console output
//! - `query`, `analysis`: player views and population aggregates

pub mod analysis;
pub mod config;
pub mod data;
pub mod errors;
pub mod export;
pub mod filter;
pub mod metrics;
pub mod query;
pub mod record;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use config::AnalyzerConfig;
pub use data::SeasonData;
pub use errors::{ScorerError, ScoringWarning};
pub use filter::{filter_records, DEFAULT_MIN_GAMES};
pub use metrics::*;
pub use query::{PlayerQuery, SortKey, ViewStats};
pub use record::{PlayerSeasonRecord, RawPlayerRow, StatLine};
pub use scorer::{MvpRanking, MvpScorer, ScoredPlayer};
pub use utils::{min_max_normalize, CompositeWeights, StatWeights, BASIC_WEIGHTS, COMPOSITE_WEIGHTS};
