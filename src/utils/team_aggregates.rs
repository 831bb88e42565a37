//! Team aggregates
//!
//! Groups surviving records by team code and averages their scoring stats.
//! Used by the Team-Impact calculator; rebuilt on every run.

use crate::record::{PlayerSeasonRecord, StatLine};
use rustc_hash::FxHashMap;

/// Per-team mean of PTS / AST / TRB / STL / BLK
#[derive(Debug, Clone, PartialEq)]
pub struct TeamAggregate {
    pub team: String,
    pub players: usize,
    pub mean: StatLine,
}

/// Average each team's stat lines
///
/// Returns a map of team code → aggregate. Every team present in `records`
/// appears exactly once.
pub fn team_means(records: &[PlayerSeasonRecord]) -> FxHashMap<String, TeamAggregate> {
    let mut sums: FxHashMap<&str, (usize, StatLine)> = FxHashMap::default();

    for record in records {
        let entry = sums.entry(record.team.as_str()).or_default();
        let line = record.stat_line();
        entry.0 += 1;
        entry.1.pts += line.pts;
        entry.1.ast += line.ast;
        entry.1.trb += line.trb;
        entry.1.stl += line.stl;
        entry.1.blk += line.blk;
    }

    sums.into_iter()
        .map(|(team, (players, total))| {
            let aggregate = TeamAggregate {
                team: team.to_string(),
                players,
                mean: total.per(players as f64),
            };
            (team.to_string(), aggregate)
        })
        .collect()
}
