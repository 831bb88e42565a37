//! Score calculators for MVP ranking
//!
//! Each calculator lives in its own module and derives one raw column for the
//! whole population. Calculators never read each other's output, so they can
//! run in any order (or concurrently, see `MvpScorer::score_parallel`).

pub mod m1_basic;
pub mod m2_advanced;
pub mod m3_position_adjusted;
pub mod m4_team_impact;

// Re-export calculator functions
pub use m1_basic::{basic_score, calculate_basic, BasicResult};
pub use m2_advanced::{
    advanced_score, assist_to_turnover, calculate_advanced, true_shooting, AdvancedResult,
    EfficiencyBreakdown,
};
pub use m3_position_adjusted::{
    calculate_position_adjusted, position_score, PositionBlend, PositionCode, PositionResult,
    PositionSet,
};
pub use m4_team_impact::{calculate_team_impact, TeamImpactResult, TEAM_IMPACT_SCALE};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four calculators, in composite order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    Basic,
    Advanced,
    Position,
    TeamImpact,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Basic,
        MetricKind::Advanced,
        MetricKind::Position,
        MetricKind::TeamImpact,
    ];

    /// Export column name for the raw score
    pub fn column_name(self) -> &'static str {
        match self {
            MetricKind::Basic => "MVP_Score_Basic",
            MetricKind::Advanced => "MVP_Score_Advanced",
            MetricKind::Position => "MVP_Score_Position",
            MetricKind::TeamImpact => "MVP_Score_Team_Impact",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Raw scores for all 4 calculators (unnormalized)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    pub basic: f64,
    pub advanced: f64,
    pub position: f64,
    pub team_impact: f64,
}

/// The same four scores after min-max scaling (0-100)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedScores {
    pub basic: f64,
    pub advanced: f64,
    pub position: f64,
    pub team_impact: f64,
}

impl RawScores {
    pub fn get(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::Basic => self.basic,
            MetricKind::Advanced => self.advanced,
            MetricKind::Position => self.position,
            MetricKind::TeamImpact => self.team_impact,
        }
    }
}

impl NormalizedScores {
    pub fn get(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::Basic => self.basic,
            MetricKind::Advanced => self.advanced,
            MetricKind::Position => self.position,
            MetricKind::TeamImpact => self.team_impact,
        }
    }

    pub fn set(&mut self, metric: MetricKind, value: f64) {
        match metric {
            MetricKind::Basic => self.basic = value,
            MetricKind::Advanced => self.advanced = value,
            MetricKind::Position => self.position = value,
            MetricKind::TeamImpact => self.team_impact = value,
        }
    }
}
