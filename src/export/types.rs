use crate::scorer::{MvpRanking, ScoredPlayer};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Structured summary of one ranking run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// RFC 3339 generation time
    pub timestamp: String,
    pub total_players: usize,
    pub top_players: Vec<TopPlayer>,
    pub team_summary: TeamSummary,
    pub position_summary: PositionSummary,
}

/// One entry of the top-N list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPlayer {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Pos")]
    pub pos: String,
    #[serde(rename = "MVP_Score_Composite")]
    pub composite: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub total_teams: usize,
    /// Rounded to one decimal; 0 when there are no teams
    pub avg_players_per_team: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub total_positions: usize,
    /// Position label → player count, keys sorted
    pub position_counts: BTreeMap<String, usize>,
}

impl From<&ScoredPlayer> for TopPlayer {
    fn from(player: &ScoredPlayer) -> Self {
        Self {
            player: player.record.player.clone(),
            team: player.record.team.clone(),
            pos: player.record.pos.clone(),
            composite: player.composite,
        }
    }
}

impl AnalysisSummary {
    /// Summarize a ranking, stamped with the current local time
    pub fn from_ranking(ranking: &MvpRanking, top_n: usize) -> Self {
        Self::build(ranking, top_n, Local::now())
    }

    pub fn build(ranking: &MvpRanking, top_n: usize, generated_at: DateTime<Local>) -> Self {
        let players = &ranking.players;

        let teams: HashSet<&str> = players.iter().map(|p| p.record.team.as_str()).collect();
        let avg_players_per_team = if teams.is_empty() {
            0.0
        } else {
            round_one_decimal(players.len() as f64 / teams.len() as f64)
        };

        let mut position_counts: BTreeMap<String, usize> = BTreeMap::new();
        for player in players {
            *position_counts.entry(player.record.pos.clone()).or_default() += 1;
        }

        Self {
            timestamp: generated_at.to_rfc3339(),
            total_players: players.len(),
            top_players: ranking.top(top_n).iter().map(TopPlayer::from).collect(),
            team_summary: TeamSummary {
                total_teams: teams.len(),
                avg_players_per_team,
            },
            position_summary: PositionSummary {
                total_positions: position_counts.len(),
                position_counts,
            },
        }
    }
}

/// One-decimal rounding with exact halves going to the even neighbour
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PlayerSeasonRecord, StatLine};
    use crate::scorer::MvpScorer;
    use chrono::TimeZone;

    fn ranking() -> MvpRanking {
        let records = vec![
            PlayerSeasonRecord::new("A", "X", "PF", 30.0, StatLine::new(25.0, 5.0, 10.0, 1.0, 1.0)),
            PlayerSeasonRecord::new("B", "X", "PG", 25.0, StatLine::new(20.0, 10.0, 5.0, 2.0, 0.0)),
            PlayerSeasonRecord::new("C", "Y", "PG", 40.0, StatLine::new(15.0, 8.0, 3.0, 1.0, 0.0)),
        ];
        MvpScorer::default().score(records)
    }

    #[test]
    fn test_summary_counts() {
        let at = Local.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap();
        let summary = AnalysisSummary::build(&ranking(), 2, at);

        assert_eq!(summary.total_players, 3);
        assert_eq!(summary.top_players.len(), 2);
        assert_eq!(summary.team_summary.total_teams, 2);
        assert_eq!(summary.team_summary.avg_players_per_team, 1.5);
        assert_eq!(summary.position_summary.total_positions, 2);
        assert_eq!(summary.position_summary.position_counts["PG"], 2);
        assert_eq!(summary.position_summary.position_counts["PF"], 1);
        assert!(summary.timestamp.starts_with("2024-04-15T12:00:00"));
    }

    #[test]
    fn test_top_n_larger_than_population() {
        let summary = AnalysisSummary::from_ranking(&ranking(), 10);
        assert_eq!(summary.top_players.len(), 3);
    }

    #[test]
    fn test_empty_summary() {
        let summary = AnalysisSummary::from_ranking(&MvpRanking::default(), 10);
        assert_eq!(summary.total_players, 0);
        assert!(summary.top_players.is_empty());
        assert_eq!(summary.team_summary.total_teams, 0);
        assert_eq!(summary.team_summary.avg_players_per_team, 0.0);
        assert!(summary.position_summary.position_counts.is_empty());
    }

    #[test]
    fn test_average_rounding() {
        assert_eq!(round_one_decimal(532.0 / 32.0), 16.6);
        assert_eq!(round_one_decimal(2.0), 2.0);
        assert_eq!(round_one_decimal(2.25), 2.2);
        assert_eq!(round_one_decimal(16.25), 16.2);
        assert_eq!(round_one_decimal(2.35), 2.4);
    }

    #[test]
    fn test_players_per_team_half_rounds_to_even() {
        // 9 players over 4 teams is 2.25
        let teams = ["A", "A", "A", "B", "B", "C", "C", "D", "D"];
        let records = teams
            .iter()
            .enumerate()
            .map(|(i, team)| {
                let pts = 10.0 + i as f64;
                PlayerSeasonRecord::new(&format!("P{}", i), team, "SF", 40.0, StatLine::new(pts, 3.0, 4.0, 1.0, 0.5))
            })
            .collect();
        let ranking = MvpScorer::default().score(records);

        let summary = AnalysisSummary::from_ranking(&ranking, 10);
        assert_eq!(summary.team_summary.total_teams, 4);
        assert_eq!(summary.team_summary.avg_players_per_team, 2.2);
    }
}
