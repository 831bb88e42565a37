//! Export of a filtered, re-sorted player view
//!
//! Rank is the position inside the view (1-based), not the overall ranking.
//! Stats and scores are rounded to two decimals.

use crate::scorer::ScoredPlayer;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

/// Column order of the view CSV
pub const VIEW_COLUMNS: [&str; 9] = [
    "Rank", "Player", "Team", "Points", "Assists", "Rebounds", "Steals", "Blocks", "MVP_Score",
];

/// Top-level JSON document for a view export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewExport {
    pub mvp_analysis: ViewAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewAnalysis {
    pub export_date: String,
    pub total_players: usize,
    pub players: Vec<ViewEntry>,
}

/// One row of the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEntry {
    pub rank: usize,
    pub player: String,
    pub team: String,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub steals: f64,
    pub blocks: f64,
    pub mvp_score: f64,
}

impl ViewEntry {
    fn new(rank: usize, player: &ScoredPlayer) -> Self {
        let r = &player.record;
        Self {
            rank,
            player: r.player.clone(),
            team: r.team.clone(),
            points: round_two_decimals(r.pts),
            assists: round_two_decimals(r.ast),
            rebounds: round_two_decimals(r.trb),
            steals: round_two_decimals(r.stl),
            blocks: round_two_decimals(r.blk),
            mvp_score: round_two_decimals(player.composite),
        }
    }
}

impl ViewExport {
    pub fn from_view(view: &[&ScoredPlayer]) -> Self {
        Self::build(view, Local::now())
    }

    pub fn build(view: &[&ScoredPlayer], generated_at: DateTime<Local>) -> Self {
        Self {
            mvp_analysis: ViewAnalysis {
                export_date: generated_at.to_rfc3339(),
                total_players: view.len(),
                players: view_entries(view),
            },
        }
    }
}

fn view_entries(view: &[&ScoredPlayer]) -> Vec<ViewEntry> {
    view.iter()
        .enumerate()
        .map(|(i, player)| ViewEntry::new(i + 1, player))
        .collect()
}

/// The view as a DataFrame in export column order
pub fn view_frame(view: &[&ScoredPlayer]) -> Result<DataFrame> {
    let entries = view_entries(view);

    let df = df![
        "Rank" => entries.iter().map(|e| e.rank as i64).collect::<Vec<i64>>(),
        "Player" => entries.iter().map(|e| e.player.clone()).collect::<Vec<String>>(),
        "Team" => entries.iter().map(|e| e.team.clone()).collect::<Vec<String>>(),
        "Points" => entries.iter().map(|e| e.points).collect::<Vec<f64>>(),
        "Assists" => entries.iter().map(|e| e.assists).collect::<Vec<f64>>(),
        "Rebounds" => entries.iter().map(|e| e.rebounds).collect::<Vec<f64>>(),
        "Steals" => entries.iter().map(|e| e.steals).collect::<Vec<f64>>(),
        "Blocks" => entries.iter().map(|e| e.blocks).collect::<Vec<f64>>(),
        "MVP_Score" => entries.iter().map(|e| e.mvp_score).collect::<Vec<f64>>(),
    ]
    .context("Failed to build view frame")?;

    Ok(df)
}

pub fn write_view_csv(path: &Path, view: &[&ScoredPlayer]) -> Result<()> {
    let mut df = view_frame(view)?;
    let mut file =
        File::create(path).with_context(|| format!("Failed to create CSV file: {:?}", path))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV: {:?}", path))?;
    info!("View exported to {:?} ({} rows)", path, df.height());
    Ok(())
}

pub fn write_view_json(path: &Path, export: &ViewExport) -> Result<()> {
    let json = serde_json::to_string_pretty(export).context("Failed to serialize view export")?;
    fs::write(path, json).with_context(|| format!("Failed to write view JSON: {:?}", path))?;
    info!("View exported to {:?}", path);
    Ok(())
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PlayerQuery, SortKey};
    use crate::record::{PlayerSeasonRecord, StatLine};
    use crate::scorer::{MvpRanking, MvpScorer};
    use chrono::TimeZone;

    fn ranking() -> MvpRanking {
        let records = vec![
            PlayerSeasonRecord::new("Nikola Jokic", "DEN", "C", 79.0, StatLine::new(26.4, 9.0, 12.4, 1.4, 0.9)),
            PlayerSeasonRecord::new("Jamal Murray", "DEN", "PG", 59.0, StatLine::new(21.2, 6.5, 4.1, 1.0, 0.7)),
            PlayerSeasonRecord::new("Luka Doncic", "DAL", "PG", 70.0, StatLine::new(33.9, 9.8, 9.2, 1.4, 0.5)),
        ];
        MvpScorer::default().score(records)
    }

    fn den_by_points(ranking: &MvpRanking) -> Vec<&ScoredPlayer> {
        PlayerQuery {
            team: Some("DEN".to_string()),
            sort_by: SortKey::Points,
            ascending: true,
            ..Default::default()
        }
        .apply(ranking)
    }

    #[test]
    fn test_rank_follows_view_order() {
        let ranking = ranking();
        let at = Local.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap();
        let export = ViewExport::build(&den_by_points(&ranking), at);

        let analysis = &export.mvp_analysis;
        assert_eq!(analysis.total_players, 2);
        assert_eq!(analysis.players[0].rank, 1);
        assert_eq!(analysis.players[0].player, "Jamal Murray");
        assert_eq!(analysis.players[1].rank, 2);
        assert_eq!(analysis.players[1].points, 26.4);
        assert!(analysis.export_date.starts_with("2024-04-15T12:00:00"));
    }

    #[test]
    fn test_write_view_csv() {
        let ranking = ranking();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mvp_analysis_export.csv");

        write_view_csv(&path, &den_by_points(&ranking)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(VIEW_COLUMNS.join(",").as_str()));
        assert!(lines.next().unwrap().starts_with("1,Jamal Murray,DEN,"));
        assert!(lines.next().unwrap().starts_with("2,Nikola Jokic,DEN,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_view_json_round_trip() {
        let ranking = ranking();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mvp_analysis_export.json");

        let export = ViewExport::from_view(&den_by_points(&ranking));
        write_view_json(&path, &export).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["mvp_analysis"]["total_players"], 2);
        assert_eq!(value["mvp_analysis"]["players"][1]["player"], "Nikola Jokic");
        assert_eq!(value["mvp_analysis"]["players"][1]["rebounds"], 12.4);

        let parsed: ViewExport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.mvp_analysis.export_date, export.mvp_analysis.export_date);
        let ranks: Vec<usize> = parsed.mvp_analysis.players.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn test_empty_view() {
        let frame = view_frame(&[]).unwrap();
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(), VIEW_COLUMNS.len());
        assert_eq!(ViewExport::from_view(&[]).mvp_analysis.total_players, 0);
    }
}
