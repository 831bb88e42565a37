//! Record Filter
//!
//! Keeps rows with at least the configured number of games and zero-fills the
//! rest of their fields. Rows are filtered before filling, so a row with no
//! games value never survives.

use crate::record::{PlayerSeasonRecord, RawPlayerRow};
use tracing::debug;

/// Default minimum games played for a record to be scored
pub const DEFAULT_MIN_GAMES: u32 = 20;

/// Drop rows below `min_games` and zero-fill the survivors, preserving order
pub fn filter_records(rows: Vec<RawPlayerRow>, min_games: u32) -> Vec<PlayerSeasonRecord> {
    let total = rows.len();
    let threshold = f64::from(min_games);

    let records: Vec<PlayerSeasonRecord> = rows
        .into_iter()
        .filter(|row| row.games.map_or(false, |g| g >= threshold))
        .map(RawPlayerRow::into_record)
        .collect();

    debug!(
        "Record filter kept {} of {} rows ({}+ games)",
        records.len(),
        total,
        min_games
    );

    records
}
