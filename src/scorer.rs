//! MVP Scorer - Main coordinator for ranking players
//!
//! Runs the five pipeline stages in order:
//!   1. Record filter (games threshold + zero-fill)
//!   2. Four independent score calculators
//!   3. Min-max normalization per calculator
//!   4. Composite blend
//!   5. Stable descending sort
//!
//! Includes both sequential and parallel (Rayon) implementations of the
//! calculator stage; both produce identical rankings.

use crate::config::AnalyzerConfig;
use crate::data::SeasonData;
use crate::errors::ScoringWarning;
use crate::filter::filter_records;
use crate::metrics::*;
use crate::record::{PlayerSeasonRecord, RawPlayerRow};
use crate::utils::{min_max_normalize, NormalizedColumn, ValueRange, COMPOSITE_WEIGHTS};
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// Main MVP scorer
#[derive(Debug, Clone, Default)]
pub struct MvpScorer {
    config: AnalyzerConfig,
}

/// One ranked player with every derived value
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlayer {
    pub record: PlayerSeasonRecord,
    pub efficiency: EfficiencyBreakdown,
    /// Unscaled player-vs-team delta behind the Team-Impact score
    pub team_impact_delta: f64,
    pub raw: RawScores,
    pub normalized: NormalizedScores,
    pub composite: f64,
}

/// Ranking produced by one run
#[derive(Debug, Clone, Default)]
pub struct MvpRanking {
    /// Sorted by composite score, descending
    pub players: Vec<ScoredPlayer>,
    /// Soft conditions absorbed during the run
    pub warnings: Vec<ScoringWarning>,
}

impl MvpRanking {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn top(&self, n: usize) -> &[ScoredPlayer] {
        &self.players[..n.min(self.players.len())]
    }
}

/// Raw calculator output for a whole population
struct CalculatorColumns {
    basic: BasicResult,
    advanced: AdvancedResult,
    position: PositionResult,
    team_impact: TeamImpactResult,
}

impl MvpScorer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Load a season CSV and rank it
    pub fn rank_csv(&self, path: &Path) -> Result<MvpRanking> {
        let data = SeasonData::load(path)?;
        Ok(self.rank_rows(data.rows))
    }

    /// Filter raw loader rows, then score them
    pub fn rank_rows(&self, rows: Vec<RawPlayerRow>) -> MvpRanking {
        let records = filter_records(rows, self.config.min_games);
        info!(
            "Scoring {} players with {}+ games",
            records.len(),
            self.config.min_games
        );
        self.score(records)
    }

    /// Score and rank already-filtered records
    pub fn score(&self, records: Vec<PlayerSeasonRecord>) -> MvpRanking {
        if records.is_empty() {
            return self.empty_ranking();
        }

        let columns = CalculatorColumns {
            basic: calculate_basic(&records),
            advanced: calculate_advanced(&records),
            position: calculate_position_adjusted(&records, self.config.position_blend),
            team_impact: calculate_team_impact(&records),
        };

        self.assemble(records, columns)
    }

    /// Score and rank IN PARALLEL
    ///
    /// The four calculators only read the shared record slice, so they run
    /// on separate Rayon tasks. Normalization and ranking stay sequential.
    pub fn score_parallel(&self, records: Vec<PlayerSeasonRecord>) -> MvpRanking {
        if records.is_empty() {
            return self.empty_ranking();
        }

        let blend = self.config.position_blend;
        let ((basic, advanced), (position, team_impact)) = rayon::join(
            || {
                rayon::join(
                    || calculate_basic(&records),
                    || calculate_advanced(&records),
                )
            },
            || {
                rayon::join(
                    || calculate_position_adjusted(&records, blend),
                    || calculate_team_impact(&records),
                )
            },
        );

        let columns = CalculatorColumns {
            basic,
            advanced,
            position,
            team_impact,
        };

        self.assemble(records, columns)
    }

    /// Legacy single-formula ranking by Basic score only
    ///
    /// Returns `(record, basic score)` pairs, highest first, ties in input order.
    pub fn rank_basic(&self, records: Vec<PlayerSeasonRecord>) -> Vec<(PlayerSeasonRecord, f64)> {
        let mut ranked: Vec<(PlayerSeasonRecord, f64)> = records
            .into_iter()
            .map(|record| {
                let score = basic_score(&record);
                (record, score)
            })
            .collect();

        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    fn empty_ranking(&self) -> MvpRanking {
        let warning = ScoringWarning::EmptyPopulation {
            min_games: self.config.min_games,
        };
        warn!("{}", warning);
        MvpRanking {
            players: Vec::new(),
            warnings: vec![warning],
        }
    }

    /// Normalize, compose and rank
    fn assemble(&self, records: Vec<PlayerSeasonRecord>, columns: CalculatorColumns) -> MvpRanking {
        debug!(
            "Computed 4 score columns across {} teams",
            columns.team_impact.teams.len()
        );

        let mut warnings = Vec::new();
        let normalized: Vec<(MetricKind, NormalizedColumn)> = MetricKind::ALL
            .iter()
            .map(|&metric| {
                let raw = match metric {
                    MetricKind::Basic => &columns.basic.raw,
                    MetricKind::Advanced => &columns.advanced.raw,
                    MetricKind::Position => &columns.position.raw,
                    MetricKind::TeamImpact => &columns.team_impact.raw,
                };
                let column = min_max_normalize(raw);
                if let ValueRange::Degenerate { value } = column.range {
                    let warning = ScoringWarning::DegenerateRange { metric, value };
                    warn!("{}", warning);
                    warnings.push(warning);
                }
                (metric, column)
            })
            .collect();

        let mut players: Vec<ScoredPlayer> = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                let raw = RawScores {
                    basic: columns.basic.raw[idx],
                    advanced: columns.advanced.raw[idx],
                    position: columns.position.raw[idx],
                    team_impact: columns.team_impact.raw[idx],
                };

                let mut scores = NormalizedScores::default();
                for (metric, column) in &normalized {
                    scores.set(*metric, column.values[idx]);
                }

                ScoredPlayer {
                    record,
                    efficiency: columns.advanced.breakdowns[idx],
                    team_impact_delta: columns.team_impact.impact[idx],
                    raw,
                    normalized: scores,
                    composite: COMPOSITE_WEIGHTS.combine(&scores),
                }
            })
            .collect();

        // Vec::sort_by is stable: equal composites keep filter order
        players.sort_by(|a, b| b.composite.total_cmp(&a.composite));

        if let Some(leader) = players.first() {
            info!(
                "Ranked {} players; leader {} ({:.1})",
                players.len(),
                leader.record.player,
                leader.composite
            );
        }

        MvpRanking { players, warnings }
    }
}
