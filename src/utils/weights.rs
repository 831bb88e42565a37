//! Weight vectors shared by the calculators and the composer

use crate::metrics::NormalizedScores;
use crate::record::StatLine;
use serde::{Deserialize, Serialize};

/// A five-weight vector over PTS / AST / TRB / STL / BLK
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatWeights {
    pub pts: f64,
    pub ast: f64,
    pub trb: f64,
    pub stl: f64,
    pub blk: f64,
}

/// Season-total weighting used by the Basic and Team-Impact calculators
pub const BASIC_WEIGHTS: StatWeights = StatWeights::new(0.4, 0.2, 0.2, 0.1, 0.1);

impl StatWeights {
    pub const fn new(pts: f64, ast: f64, trb: f64, stl: f64, blk: f64) -> Self {
        Self { pts, ast, trb, stl, blk }
    }

    /// Weighted sum of a stat line
    pub fn apply(&self, line: &StatLine) -> f64 {
        line.pts * self.pts
            + line.ast * self.ast
            + line.trb * self.trb
            + line.stl * self.stl
            + line.blk * self.blk
    }

    pub fn sum(&self) -> f64 {
        self.pts + self.ast + self.trb + self.stl + self.blk
    }

    /// Component-wise mean; `None` for an empty slice
    pub fn average(vectors: &[StatWeights]) -> Option<StatWeights> {
        if vectors.is_empty() {
            return None;
        }
        let n = vectors.len() as f64;
        let total = vectors.iter().fold(StatWeights::new(0.0, 0.0, 0.0, 0.0, 0.0), |acc, w| {
            StatWeights::new(
                acc.pts + w.pts,
                acc.ast + w.ast,
                acc.trb + w.trb,
                acc.stl + w.stl,
                acc.blk + w.blk,
            )
        });
        Some(StatWeights::new(
            total.pts / n,
            total.ast / n,
            total.trb / n,
            total.stl / n,
            total.blk / n,
        ))
    }
}

/// Blend of the four normalized scores into the ranking key
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub basic: f64,
    pub advanced: f64,
    pub position: f64,
    pub team_impact: f64,
}

pub const COMPOSITE_WEIGHTS: CompositeWeights = CompositeWeights {
    basic: 0.3,
    advanced: 0.3,
    position: 0.2,
    team_impact: 0.2,
};

impl CompositeWeights {
    pub fn combine(&self, scores: &NormalizedScores) -> f64 {
        scores.basic * self.basic
            + scores.advanced * self.advanced
            + scores.position * self.position
            + scores.team_impact * self.team_impact
    }

    pub fn sum(&self) -> f64 {
        self.basic + self.advanced + self.position + self.team_impact
    }
}
