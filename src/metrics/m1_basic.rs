//! METRIC 1: BASIC SCORE
//!
//! Fixed linear weighting over season stats:
//! `0.4·PTS + 0.2·AST + 0.2·TRB + 0.1·STL + 0.1·BLK`
//!
//! Pure function of one record; no cross-record dependency.

use crate::record::PlayerSeasonRecord;
use crate::utils::BASIC_WEIGHTS;

/// Result of the Basic calculation
#[derive(Debug, Clone)]
pub struct BasicResult {
    /// One raw score per record, in input order
    pub raw: Vec<f64>,
}

pub fn basic_score(record: &PlayerSeasonRecord) -> f64 {
    BASIC_WEIGHTS.apply(&record.stat_line())
}

/// Calculate the Basic score column
pub fn calculate_basic(records: &[PlayerSeasonRecord]) -> BasicResult {
    BasicResult {
        raw: records.iter().map(basic_score).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StatLine;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_scores() {
        let records = vec![
            PlayerSeasonRecord::new("A", "X", "PF", 30.0, StatLine::new(25.0, 5.0, 10.0, 1.0, 1.0)),
            PlayerSeasonRecord::new("B", "X", "PG", 25.0, StatLine::new(20.0, 10.0, 5.0, 2.0, 0.0)),
        ];

        let result = calculate_basic(&records);
        // 25·0.4 + 5·0.2 + 10·0.2 + 1·0.1 + 1·0.1
        assert_relative_eq!(result.raw[0], 13.2, epsilon = 1e-9);
        // 20·0.4 + 10·0.2 + 5·0.2 + 2·0.1 + 0·0.1
        assert_relative_eq!(result.raw[1], 11.2, epsilon = 1e-9);
    }

    #[test]
    fn test_games_played_does_not_matter() {
        let line = StatLine::new(10.0, 2.0, 3.0, 1.0, 1.0);
        let short = PlayerSeasonRecord::new("a", "X", "SF", 20.0, line);
        let long = PlayerSeasonRecord::new("b", "X", "SF", 82.0, line);
        assert_eq!(basic_score(&short), basic_score(&long));
    }
}
