//! Data Loading
//!
//! Reads a per-game season table with Polars and turns it into typed loader
//! rows. Only recognized columns are projected; anything else (rank indices
//! such as `Rk` or `R`, advanced columns the scorer never reads) is dropped
//! and reported.
//!
//! Required columns: Player, Team, Pos, G, PTS, AST, TRB, STL, BLK.
//! Optional columns: FGA, FTA, TOV (absent → zero for every row).

use crate::errors::ScorerError;
use crate::record::RawPlayerRow;
use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Identity columns, read as strings
pub const TEXT_COLS: &[&str] = &["Player", "Team", "Pos"];

/// Numeric columns every scored table must have
pub const REQUIRED_NUMERIC_COLS: &[&str] = &["G", "PTS", "AST", "TRB", "STL", "BLK"];

/// Efficiency inputs; zero-filled when absent
pub const OPTIONAL_NUMERIC_COLS: &[&str] = &["FGA", "FTA", "TOV"];

/// Loaded season table
#[derive(Debug, Clone, Default)]
pub struct SeasonData {
    /// One row per player per team-stint, in file order
    pub rows: Vec<RawPlayerRow>,
    /// Recognized columns present in the source
    pub recognized_columns: Vec<String>,
    /// Source columns outside the schema
    pub dropped_columns: Vec<String>,
}

impl SeasonData {
    /// Load a season CSV
    ///
    /// `NA` cells are read as null. A missing file is reported as
    /// `ScorerError::MissingInput`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScorerError::MissingInput {
                path: path.to_path_buf(),
            }
            .into());
        }

        info!("Loading season data from {:?}", path);

        let parse_options = CsvParseOptions::default()
            .with_null_values(Some(NullValues::AllColumnsSingle("NA".into())));

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None) // Scan entire file
            .with_parse_options(parse_options)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load season CSV: {:?}", path))?;

        let data = Self::from_dataframe(&df)?;
        info!(
            "  Rows: {} ({} columns dropped)",
            data.rows.len(),
            data.dropped_columns.len()
        );
        Ok(data)
    }

    /// Convert an in-memory table into loader rows
    ///
    /// A table with no rows is accepted as-is. Otherwise every required column
    /// must be present; numeric cells that fail to parse become missing.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let available: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let recognized: HashSet<&str> = TEXT_COLS
            .iter()
            .chain(REQUIRED_NUMERIC_COLS)
            .chain(OPTIONAL_NUMERIC_COLS)
            .copied()
            .collect();

        let (recognized_columns, dropped_columns): (Vec<String>, Vec<String>) = available
            .iter()
            .cloned()
            .partition(|name| recognized.contains(name.as_str()));

        if !dropped_columns.is_empty() {
            debug!("Dropping unrecognized columns: {:?}", dropped_columns);
        }

        if df.height() == 0 {
            return Ok(Self {
                rows: Vec::new(),
                recognized_columns,
                dropped_columns,
            });
        }

        for &required in TEXT_COLS.iter().chain(REQUIRED_NUMERIC_COLS) {
            if !recognized_columns.iter().any(|name| name == required) {
                return Err(ScorerError::Schema {
                    column: required.to_string(),
                    available,
                }
                .into());
            }
        }

        let height = df.height();
        let player = text_column(df, "Player")?;
        let team = text_column(df, "Team")?;
        let pos = text_column(df, "Pos")?;
        let games = numeric_column(df, "G")?;
        let pts = numeric_column(df, "PTS")?;
        let ast = numeric_column(df, "AST")?;
        let trb = numeric_column(df, "TRB")?;
        let stl = numeric_column(df, "STL")?;
        let blk = numeric_column(df, "BLK")?;
        let fga = optional_numeric_column(df, "FGA", height)?;
        let fta = optional_numeric_column(df, "FTA", height)?;
        let tov = optional_numeric_column(df, "TOV", height)?;

        let rows = (0..height)
            .map(|idx| RawPlayerRow {
                player: player[idx].clone(),
                team: team[idx].clone(),
                pos: pos[idx].clone(),
                games: games[idx],
                pts: pts[idx],
                ast: ast[idx],
                trb: trb[idx],
                stl: stl[idx],
                blk: blk[idx],
                fga: fga[idx],
                fta: fta[idx],
                tov: tov[idx],
            })
            .collect();

        Ok(Self {
            rows,
            recognized_columns,
            dropped_columns,
        })
    }

    /// Rows with at least `min_games` games (before scoring)
    pub fn eligible_rows(&self, min_games: u32) -> usize {
        let threshold = f64::from(min_games);
        self.rows
            .iter()
            .filter(|row| row.games.map_or(false, |g| g >= threshold))
            .count()
    }
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::String)
        .with_context(|| format!("Column '{}' cannot be read as text", name))?;

    let values = column
        .str()
        .with_context(|| format!("Column '{}' is not string type", name))?
        .into_iter()
        .map(|opt| opt.map(|s| s.trim().to_string()))
        .collect();

    Ok(values)
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' cannot be read as numeric", name))?;

    let values = column
        .f64()
        .with_context(|| format!("Column '{}' is not f64 type", name))?
        .into_iter()
        .map(|opt| opt.filter(|v| !v.is_nan()))
        .collect();

    Ok(values)
}

fn optional_numeric_column(df: &DataFrame, name: &str, height: usize) -> Result<Vec<Option<f64>>> {
    if df.get_column_names().iter().any(|col| col.as_str() == name) {
        numeric_column(df, name)
    } else {
        debug!("Optional column '{}' absent; treating as zero", name);
        Ok(vec![None; height])
    }
}
