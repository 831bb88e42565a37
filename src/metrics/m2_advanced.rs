//! METRIC 2: ADVANCED SCORE (PER-GAME + EFFICIENCY)
//!
//! Per-game rates weighted `0.35 / 0.25 / 0.20 / 0.10 / 0.10`, plus two
//! efficiency bonuses:
//!   - true shooting proxy `PTS / (2·(FGA + 0.44·FTA))`, scaled by 50
//!   - assist-to-turnover `AST / (TOV + 1)`, scaled by 2
//!
//! The bonus multipliers bring the efficiency terms to the same magnitude as
//! the per-game terms before normalization.

use crate::record::{PlayerSeasonRecord, StatLine};
use crate::utils::StatWeights;

pub const PER_GAME_WEIGHTS: StatWeights = StatWeights::new(0.35, 0.25, 0.20, 0.10, 0.10);

/// Free throws count as 0.44 of a shot attempt
pub const FTA_POSSESSION_FACTOR: f64 = 0.44;
pub const TRUE_SHOOTING_BONUS: f64 = 50.0;
pub const AST_TO_BONUS: f64 = 2.0;

/// Intermediate values behind one advanced score
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EfficiencyBreakdown {
    pub per_game: StatLine,
    pub true_shooting: f64,
    pub ast_to_ratio: f64,
}

/// Result of the Advanced calculation
#[derive(Debug, Clone)]
pub struct AdvancedResult {
    pub raw: Vec<f64>,
    pub breakdowns: Vec<EfficiencyBreakdown>,
}

/// True-shooting proxy; 0 when the player took no shots at all
pub fn true_shooting(record: &PlayerSeasonRecord) -> f64 {
    let denominator = 2.0 * (record.fga + FTA_POSSESSION_FACTOR * record.fta);
    if denominator > 0.0 {
        record.pts / denominator
    } else {
        0.0
    }
}

/// Assist-to-turnover with a +1 offset so zero turnovers stays finite
pub fn assist_to_turnover(record: &PlayerSeasonRecord) -> f64 {
    record.ast / (record.tov + 1.0)
}

pub fn advanced_score(record: &PlayerSeasonRecord) -> (f64, EfficiencyBreakdown) {
    let breakdown = EfficiencyBreakdown {
        per_game: record.stat_line().per(record.games),
        true_shooting: true_shooting(record),
        ast_to_ratio: assist_to_turnover(record),
    };

    let score = PER_GAME_WEIGHTS.apply(&breakdown.per_game)
        + breakdown.true_shooting * TRUE_SHOOTING_BONUS
        + breakdown.ast_to_ratio * AST_TO_BONUS;

    (score, breakdown)
}

/// Calculate the Advanced score column
pub fn calculate_advanced(records: &[PlayerSeasonRecord]) -> AdvancedResult {
    let (raw, breakdowns): (Vec<f64>, Vec<EfficiencyBreakdown>) =
        records.iter().map(advanced_score).unzip();
    AdvancedResult { raw, breakdowns }
}
