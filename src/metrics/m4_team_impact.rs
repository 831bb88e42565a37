//! METRIC 4: TEAM IMPACT
//!
//! Measures how far a player sits above (or below) their own team's average
//! line, using the Basic weights:
//!
//!   impact = Σ w · (player stat − team mean stat)
//!   score  = Basic + 0.1 · impact
//!
//! A player who is the only member of their team has impact exactly 0, so
//! their score reduces to the Basic score.

use crate::metrics::m1_basic::basic_score;
use crate::record::PlayerSeasonRecord;
use crate::utils::{team_means, TeamAggregate, BASIC_WEIGHTS};
use rustc_hash::FxHashMap;

/// Scale applied to the impact term before adding it to Basic
pub const TEAM_IMPACT_SCALE: f64 = 0.1;

/// Result of the Team-Impact calculation
#[derive(Debug, Clone)]
pub struct TeamImpactResult {
    pub raw: Vec<f64>,
    /// Unscaled impact term per record
    pub impact: Vec<f64>,
    /// Team code → aggregate used for the deltas
    pub teams: FxHashMap<String, TeamAggregate>,
}

/// Calculate the Team-Impact score column
pub fn calculate_team_impact(records: &[PlayerSeasonRecord]) -> TeamImpactResult {
    let teams = team_means(records);

    let impact: Vec<f64> = records
        .iter()
        .map(|record| {
            teams.get(&record.team).map_or(0.0, |aggregate| {
                BASIC_WEIGHTS.apply(&record.stat_line().minus(&aggregate.mean))
            })
        })
        .collect();

    let raw = records
        .iter()
        .zip(&impact)
        .map(|(record, delta)| basic_score(record) + TEAM_IMPACT_SCALE * delta)
        .collect();

    TeamImpactResult { raw, impact, teams }
}
