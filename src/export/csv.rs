//! Flat CSV exports written through Polars

use crate::metrics::MetricKind;
use crate::record::PlayerSeasonRecord;
use crate::scorer::MvpRanking;
use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Column order of the enhanced candidates export
pub const CANDIDATE_COLUMNS: [&str; 14] = [
    "Player",
    "Team",
    "Pos",
    "G",
    "PTS",
    "AST",
    "TRB",
    "STL",
    "BLK",
    "MVP_Score_Basic",
    "MVP_Score_Advanced",
    "MVP_Score_Position",
    "MVP_Score_Team_Impact",
    "MVP_Score_Composite",
];

/// Column order of the legacy basic export
pub const BASIC_COLUMNS: [&str; 8] = ["Player", "Team", "PTS", "AST", "TRB", "STL", "BLK", "MVP_Score"];

/// Ranked players as a DataFrame in export column order
pub fn candidates_frame(ranking: &MvpRanking) -> Result<DataFrame> {
    let players = &ranking.players;
    let records: Vec<&PlayerSeasonRecord> = players.iter().map(|p| &p.record).collect();

    let raw = |metric: MetricKind| -> Vec<f64> { players.iter().map(|p| p.raw.get(metric)).collect() };
    let composite: Vec<f64> = players.iter().map(|p| p.composite).collect();
    // Games are whole counts in the source table
    let games: Vec<i64> = records.iter().map(|r| r.games.round() as i64).collect();

    let df = df![
        "Player" => text(&records, |r| &r.player),
        "Team" => text(&records, |r| &r.team),
        "Pos" => text(&records, |r| &r.pos),
        "G" => games,
        "PTS" => numbers(&records, |r| r.pts),
        "AST" => numbers(&records, |r| r.ast),
        "TRB" => numbers(&records, |r| r.trb),
        "STL" => numbers(&records, |r| r.stl),
        "BLK" => numbers(&records, |r| r.blk),
        MetricKind::Basic.column_name() => raw(MetricKind::Basic),
        MetricKind::Advanced.column_name() => raw(MetricKind::Advanced),
        MetricKind::Position.column_name() => raw(MetricKind::Position),
        MetricKind::TeamImpact.column_name() => raw(MetricKind::TeamImpact),
        "MVP_Score_Composite" => composite,
    ]
    .context("Failed to build candidates frame")?;

    Ok(df)
}

/// Top `n` of a Basic-only ranking as a DataFrame
pub fn basic_candidates_frame(ranked: &[(PlayerSeasonRecord, f64)], n: usize) -> Result<DataFrame> {
    let top = &ranked[..n.min(ranked.len())];
    let records: Vec<&PlayerSeasonRecord> = top.iter().map(|(r, _)| r).collect();
    let scores: Vec<f64> = top.iter().map(|(_, score)| *score).collect();

    let df = df![
        "Player" => text(&records, |r| &r.player),
        "Team" => text(&records, |r| &r.team),
        "PTS" => numbers(&records, |r| r.pts),
        "AST" => numbers(&records, |r| r.ast),
        "TRB" => numbers(&records, |r| r.trb),
        "STL" => numbers(&records, |r| r.stl),
        "BLK" => numbers(&records, |r| r.blk),
        "MVP_Score" => scores,
    ]
    .context("Failed to build basic candidates frame")?;

    Ok(df)
}

/// Write the enhanced candidates table
pub fn write_candidates_csv(path: &Path, ranking: &MvpRanking) -> Result<()> {
    let mut df = candidates_frame(ranking)?;
    write_frame(path, &mut df)?;
    info!("Results exported to {:?} ({} rows)", path, df.height());
    Ok(())
}

/// Write the legacy top-`n` basic table
pub fn write_basic_candidates_csv(
    path: &Path,
    ranked: &[(PlayerSeasonRecord, f64)],
    n: usize,
) -> Result<()> {
    let mut df = basic_candidates_frame(ranked, n)?;
    write_frame(path, &mut df)?;
    info!("Basic candidates exported to {:?} ({} rows)", path, df.height());
    Ok(())
}

fn write_frame(path: &Path, df: &mut DataFrame) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create CSV file: {:?}", path))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("Failed to write CSV: {:?}", path))
}

fn text<F>(records: &[&PlayerSeasonRecord], field: F) -> Vec<String>
where
    F: Fn(&PlayerSeasonRecord) -> &String,
{
    records.iter().map(|r| field(r).clone()).collect()
}

fn numbers<F>(records: &[&PlayerSeasonRecord], field: F) -> Vec<f64>
where
    F: Fn(&PlayerSeasonRecord) -> f64,
{
    records.iter().map(|r| field(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StatLine;
    use crate::scorer::MvpScorer;

    fn records() -> Vec<PlayerSeasonRecord> {
        vec![
            PlayerSeasonRecord::new("B", "X", "PG", 25.0, StatLine::new(20.0, 10.0, 5.0, 2.0, 0.0)),
            PlayerSeasonRecord::new("A", "X", "PF", 30.0, StatLine::new(25.0, 5.0, 10.0, 1.0, 1.0)),
        ]
    }

    #[test]
    fn test_candidates_frame_column_order() {
        let ranking = MvpScorer::default().score(records());
        let df = candidates_frame(&ranking).unwrap();

        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, CANDIDATE_COLUMNS.to_vec());
        assert_eq!(df.height(), 2);

        let first = df.column("Player").unwrap().str().unwrap().get(0);
        assert_eq!(first, Some("A"));
        assert_eq!(df.column("G").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("G").unwrap().i64().unwrap().get(0), Some(30));
    }

    #[test]
    fn test_empty_ranking_frame() {
        let df = candidates_frame(&MvpRanking::default()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), CANDIDATE_COLUMNS.len());
    }

    #[test]
    fn test_basic_frame_truncates() {
        let ranked = MvpScorer::default().rank_basic(records());
        let df = basic_candidates_frame(&ranked, 1).unwrap();

        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, BASIC_COLUMNS.to_vec());
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn test_write_candidates_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mvp_candidates_enhanced.csv");

        let ranking = MvpScorer::default().score(records());
        write_candidates_csv(&path, &ranking).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(CANDIDATE_COLUMNS.join(",").as_str()));
        assert!(lines.next().unwrap().starts_with("A,X,PF,30,"));
        assert_eq!(contents.lines().count(), 3);
    }
}
