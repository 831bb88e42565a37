//! Utility modules for MVP scoring
//!
//! Contains shared functionality used across multiple calculators:
//! - Normalization: min-max scaling onto 0-100
//! - Weights: stat and composite weight vectors
//! - Team aggregates: per-team stat means

pub mod normalization;
pub mod team_aggregates;
pub mod weights;

// Re-export commonly used types
pub use normalization::{min_max_normalize, value_range, NormalizedColumn, ValueRange};
pub use team_aggregates::{team_means, TeamAggregate};
pub use weights::{CompositeWeights, StatWeights, BASIC_WEIGHTS, COMPOSITE_WEIGHTS};
