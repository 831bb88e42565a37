//! METRIC 3: POSITION-ADJUSTED SCORE
//!
//! Each canonical position carries its own weighting over the five scoring
//! stats. A label is parsed once into the set of canonical codes it contains
//! (substring match, checked in the order PG, SG, SF, PF, C), so hybrid labels
//! such as "SG-SF" match more than one code.
//!
//! **Multi-position labels** combine according to `PositionBlend`:
//!   - `Precedence`: the last matched code in canonical order wins
//!     (C > PF > SF > SG > PG). This is the long-standing ranking behaviour.
//!   - `Average`: matched weight vectors are averaged component-wise.
//!
//! Labels matching no canonical code score 0.

use crate::record::PlayerSeasonRecord;
use crate::utils::StatWeights;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Canonical basketball position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionCode {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl PositionCode {
    /// Matching order; later entries take precedence
    pub const CANONICAL_ORDER: [PositionCode; 5] = [
        PositionCode::PointGuard,
        PositionCode::ShootingGuard,
        PositionCode::SmallForward,
        PositionCode::PowerForward,
        PositionCode::Center,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PositionCode::PointGuard => "PG",
            PositionCode::ShootingGuard => "SG",
            PositionCode::SmallForward => "SF",
            PositionCode::PowerForward => "PF",
            PositionCode::Center => "C",
        }
    }

    pub fn weights(self) -> StatWeights {
        match self {
            PositionCode::PointGuard => StatWeights::new(0.30, 0.40, 0.10, 0.10, 0.10),
            PositionCode::ShootingGuard => StatWeights::new(0.40, 0.20, 0.10, 0.20, 0.10),
            PositionCode::SmallForward => StatWeights::new(0.35, 0.20, 0.20, 0.15, 0.10),
            PositionCode::PowerForward => StatWeights::new(0.30, 0.15, 0.30, 0.10, 0.15),
            PositionCode::Center => StatWeights::new(0.25, 0.10, 0.35, 0.05, 0.25),
        }
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How weight vectors of a multi-position label are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionBlend {
    #[default]
    Precedence,
    Average,
}

impl FromStr for PositionBlend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "precedence" => Ok(PositionBlend::Precedence),
            "average" => Ok(PositionBlend::Average),
            other => Err(format!(
                "unknown position blend '{}' (expected 'precedence' or 'average')",
                other
            )),
        }
    }
}

impl fmt::Display for PositionBlend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionBlend::Precedence => f.write_str("precedence"),
            PositionBlend::Average => f.write_str("average"),
        }
    }
}

/// Canonical codes found in one position label, in canonical order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSet {
    codes: SmallVec<[PositionCode; 2]>,
}

impl PositionSet {
    pub fn parse(label: &str) -> Self {
        let codes = PositionCode::CANONICAL_ORDER
            .iter()
            .copied()
            .filter(|code| label.contains(code.code()))
            .collect();
        Self { codes }
    }

    pub fn codes(&self) -> &[PositionCode] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Effective weight vector, or `None` when no code matched
    pub fn weights(&self, blend: PositionBlend) -> Option<StatWeights> {
        match blend {
            PositionBlend::Precedence => self.codes.last().map(|code| code.weights()),
            PositionBlend::Average => {
                let vectors: SmallVec<[StatWeights; 2]> =
                    self.codes.iter().map(|code| code.weights()).collect();
                StatWeights::average(&vectors)
            }
        }
    }
}

/// Result of the Position-Adjusted calculation
#[derive(Debug, Clone)]
pub struct PositionResult {
    pub raw: Vec<f64>,
    /// Parsed position of each record
    pub positions: Vec<PositionSet>,
}

pub fn position_score(record: &PlayerSeasonRecord, positions: &PositionSet, blend: PositionBlend) -> f64 {
    positions
        .weights(blend)
        .map_or(0.0, |weights| weights.apply(&record.stat_line()))
}

/// Calculate the Position-Adjusted score column
pub fn calculate_position_adjusted(records: &[PlayerSeasonRecord], blend: PositionBlend) -> PositionResult {
    let positions: Vec<PositionSet> = records.iter().map(|r| PositionSet::parse(&r.pos)).collect();
    let raw = records
        .iter()
        .zip(&positions)
        .map(|(record, set)| position_score(record, set, blend))
        .collect();

    PositionResult { raw, positions }
}
