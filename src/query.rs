//! Filtered and re-sorted views over a finished ranking

use crate::errors::ScorerError;
use crate::scorer::{MvpRanking, ScoredPlayer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Column a player view can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Score,
    Points,
    Assists,
    Rebounds,
    Steals,
    Blocks,
    Name,
}

impl SortKey {
    fn compare(self, a: &ScoredPlayer, b: &ScoredPlayer) -> Ordering {
        let (ra, rb) = (&a.record, &b.record);
        match self {
            SortKey::Score => a.composite.total_cmp(&b.composite),
            SortKey::Points => ra.pts.total_cmp(&rb.pts),
            SortKey::Assists => ra.ast.total_cmp(&rb.ast),
            SortKey::Rebounds => ra.trb.total_cmp(&rb.trb),
            SortKey::Steals => ra.stl.total_cmp(&rb.stl),
            SortKey::Blocks => ra.blk.total_cmp(&rb.blk),
            SortKey::Name => ra.player.cmp(&rb.player),
        }
    }
}

impl FromStr for SortKey {
    type Err = ScorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "score" | "mvp" => Ok(SortKey::Score),
            "points" | "pts" => Ok(SortKey::Points),
            "assists" | "ast" => Ok(SortKey::Assists),
            "rebounds" | "trb" => Ok(SortKey::Rebounds),
            "steals" | "stl" => Ok(SortKey::Steals),
            "blocks" | "blk" => Ok(SortKey::Blocks),
            "name" | "player" => Ok(SortKey::Name),
            other => Err(ScorerError::InvalidConfig(format!(
                "unknown sort key '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Score => "score",
            SortKey::Points => "points",
            SortKey::Assists => "assists",
            SortKey::Rebounds => "rebounds",
            SortKey::Steals => "steals",
            SortKey::Blocks => "blocks",
            SortKey::Name => "name",
        };
        f.write_str(label)
    }
}

/// Search, filter and ordering for a player view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerQuery {
    /// Case-insensitive substring of the player name
    pub search: Option<String>,
    /// Exact team code
    pub team: Option<String>,
    /// Substring of the position label
    pub position: Option<String>,
    pub sort_by: SortKey,
    pub ascending: bool,
}

impl PlayerQuery {
    fn matches(&self, player: &ScoredPlayer) -> bool {
        let record = &player.record;

        if let Some(search) = &self.search {
            if !record
                .player
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(team) = &self.team {
            if &record.team != team {
                return false;
            }
        }
        if let Some(position) = &self.position {
            if !record.pos.contains(position.as_str()) {
                return false;
            }
        }
        true
    }

    /// Apply the filters, then a stable sort on `sort_by`
    pub fn apply<'a>(&self, ranking: &'a MvpRanking) -> Vec<&'a ScoredPlayer> {
        let mut view: Vec<&ScoredPlayer> =
            ranking.players.iter().filter(|p| self.matches(p)).collect();

        let key = self.sort_by;
        if self.ascending {
            view.sort_by(|a, b| key.compare(a, b));
        } else {
            view.sort_by(|a, b| key.compare(b, a));
        }
        view
    }
}

/// Headline numbers for a player view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStats {
    pub count: usize,
    pub average_composite: f64,
    /// Highest composite in the view (first on ties)
    pub top_player: Option<String>,
}

impl ViewStats {
    pub fn from_players(players: &[&ScoredPlayer]) -> Self {
        let count = players.len();
        let average_composite = if count == 0 {
            0.0
        } else {
            players.iter().map(|p| p.composite).sum::<f64>() / count as f64
        };

        let mut top: Option<&ScoredPlayer> = None;
        for player in players {
            if top.map_or(true, |t| player.composite > t.composite) {
                top = Some(*player);
            }
        }

        Self {
            count,
            average_composite,
            top_player: top.map(|p| p.record.player.clone()),
        }
    }
}

/// Team codes present in the ranking, sorted
pub fn distinct_teams(ranking: &MvpRanking) -> Vec<String> {
    ranking
        .players
        .iter()
        .map(|p| p.record.team.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PlayerSeasonRecord, StatLine};
    use crate::scorer::MvpScorer;
    use approx::assert_relative_eq;

    fn ranking() -> MvpRanking {
        let records = vec![
            PlayerSeasonRecord::new("Nikola Jokic", "DEN", "C", 79.0, StatLine::new(26.4, 9.0, 12.4, 1.4, 0.9)),
            PlayerSeasonRecord::new("Jamal Murray", "DEN", "PG", 59.0, StatLine::new(21.2, 6.5, 4.1, 1.0, 0.7)),
            PlayerSeasonRecord::new("Luka Doncic", "DAL", "PG", 70.0, StatLine::new(33.9, 9.8, 9.2, 1.4, 0.5)),
            PlayerSeasonRecord::new("Kyrie Irving", "DAL", "SG-PG", 58.0, StatLine::new(25.6, 5.2, 5.0, 1.3, 0.5)),
        ];
        MvpScorer::default().score(records)
    }

    fn names(view: &[&ScoredPlayer]) -> Vec<String> {
        view.iter().map(|p| p.record.player.clone()).collect()
    }

    #[test]
    fn test_default_query_keeps_ranking_order() {
        let ranking = ranking();
        let view = PlayerQuery::default().apply(&ranking);

        let expected: Vec<String> = ranking.players.iter().map(|p| p.record.player.clone()).collect();
        assert_eq!(names(&view), expected);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let ranking = ranking();
        let query = PlayerQuery {
            search: Some("jOkIc".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&query.apply(&ranking)), vec!["Nikola Jokic"]);
    }

    #[test]
    fn test_team_and_position_filters() {
        let ranking = ranking();
        let query = PlayerQuery {
            team: Some("DAL".to_string()),
            position: Some("PG".to_string()),
            sort_by: SortKey::Name,
            ascending: true,
            ..Default::default()
        };
        assert_eq!(names(&query.apply(&ranking)), vec!["Kyrie Irving", "Luka Doncic"]);

        let partial_team = PlayerQuery {
            team: Some("DA".to_string()),
            ..Default::default()
        };
        assert!(partial_team.apply(&ranking).is_empty());
    }

    #[test]
    fn test_sort_by_points() {
        let ranking = ranking();
        let query = PlayerQuery {
            sort_by: SortKey::Points,
            ..Default::default()
        };
        let view = query.apply(&ranking);
        assert_eq!(view[0].record.player, "Luka Doncic");
        assert_eq!(view[3].record.player, "Jamal Murray");
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("score".parse::<SortKey>().unwrap(), SortKey::Score);
        assert_eq!("Rebounds".parse::<SortKey>().unwrap(), SortKey::Rebounds);
        assert_eq!("blk".parse::<SortKey>().unwrap(), SortKey::Blocks);
        assert!("minutes".parse::<SortKey>().is_err());
        assert_eq!(SortKey::Assists.to_string(), "assists");
    }

    #[test]
    fn test_view_stats() {
        let ranking = ranking();
        let view = PlayerQuery::default().apply(&ranking);
        let stats = ViewStats::from_players(&view);

        let mean = ranking.players.iter().map(|p| p.composite).sum::<f64>() / 4.0;
        assert_eq!(stats.count, 4);
        assert_relative_eq!(stats.average_composite, mean, epsilon = 1e-9);
        assert_eq!(stats.top_player.as_deref(), Some(ranking.players[0].record.player.as_str()));

        let empty = ViewStats::from_players(&[]);
        assert_eq!(empty.count, 0);
        assert_eq!(empty.average_composite, 0.0);
        assert!(empty.top_player.is_none());
    }

    #[test]
    fn test_distinct_teams_sorted() {
        assert_eq!(distinct_teams(&ranking()), vec!["DAL", "DEN"]);
    }
}
