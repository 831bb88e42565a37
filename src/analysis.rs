//! Population aggregates over a ranking
//!
//! Team and position averages of the composite score, plus how strongly each
//! counting stat tracks the composite. These back the dashboard view.

use crate::record::PlayerSeasonRecord;
use crate::scorer::MvpRanking;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Mean composite score for one group of players
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAverage {
    pub label: String,
    pub players: usize,
    pub average_composite: f64,
}

/// Pearson correlation of each counting stat with the composite score
///
/// `None` where the correlation is undefined (fewer than two players or a
/// constant column).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatCorrelations {
    pub pts: Option<f64>,
    pub ast: Option<f64>,
    pub trb: Option<f64>,
    pub stl: Option<f64>,
    pub blk: Option<f64>,
}

/// Mean composite per team, highest first (ties by team code)
pub fn team_average_composite(ranking: &MvpRanking) -> Vec<GroupAverage> {
    let mut sums: FxHashMap<&str, (usize, f64)> = FxHashMap::default();
    for player in &ranking.players {
        let entry = sums.entry(player.record.team.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += player.composite;
    }

    let mut averages: Vec<GroupAverage> = sums
        .into_iter()
        .map(|(team, (players, total))| GroupAverage {
            label: team.to_string(),
            players,
            average_composite: total / players as f64,
        })
        .collect();

    averages.sort_by(|a, b| {
        b.average_composite
            .total_cmp(&a.average_composite)
            .then_with(|| a.label.cmp(&b.label))
    });
    averages
}

/// Mean composite per position label, ordered by label
pub fn position_average_composite(ranking: &MvpRanking) -> Vec<GroupAverage> {
    let mut sums: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for player in &ranking.players {
        let entry = sums.entry(player.record.pos.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += player.composite;
    }

    sums.into_iter()
        .map(|(pos, (players, total))| GroupAverage {
            label: pos.to_string(),
            players,
            average_composite: total / players as f64,
        })
        .collect()
}

pub fn stat_correlations(ranking: &MvpRanking) -> StatCorrelations {
    let composite: Vec<f64> = ranking.players.iter().map(|p| p.composite).collect();
    let against = |field: fn(&PlayerSeasonRecord) -> f64| -> Option<f64> {
        let stat: Vec<f64> = ranking.players.iter().map(|p| field(&p.record)).collect();
        pearson(&stat, &composite)
    };

    StatCorrelations {
        pts: against(|r| r.pts),
        ast: against(|r| r.ast),
        trb: against(|r| r.trb),
        stl: against(|r| r.stl),
        blk: against(|r| r.blk),
    }
}

fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n < 2 || n != ys.len() {
        return None;
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}
