//! Player-season records
//!
//! `RawPlayerRow` is what the loader hands over: every recognized column is
//! optional. `PlayerSeasonRecord` is the zero-filled, fully-populated form that
//! the Record Filter produces and every calculator consumes.

use serde::{Deserialize, Serialize};

/// One loader row, before filtering and zero-fill
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPlayerRow {
    pub player: Option<String>,
    pub team: Option<String>,
    pub pos: Option<String>,
    pub games: Option<f64>,
    pub pts: Option<f64>,
    pub ast: Option<f64>,
    pub trb: Option<f64>,
    pub stl: Option<f64>,
    pub blk: Option<f64>,
    pub fga: Option<f64>,
    pub fta: Option<f64>,
    pub tov: Option<f64>,
}

/// One row per player per team-stint, all fields populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonRecord {
    pub player: String,
    pub team: String,
    pub pos: String,
    pub games: f64,
    pub pts: f64,
    pub ast: f64,
    pub trb: f64,
    pub stl: f64,
    pub blk: f64,
    pub fga: f64,
    pub fta: f64,
    pub tov: f64,
}

impl RawPlayerRow {
    /// Zero-fill every absent field
    ///
    /// Negative counts are clamped to 0 so the non-negativity invariant holds
    /// even for malformed source rows.
    pub fn into_record(self) -> PlayerSeasonRecord {
        fn count(value: Option<f64>) -> f64 {
            value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
        }

        PlayerSeasonRecord {
            player: self.player.unwrap_or_default(),
            team: self.team.unwrap_or_default(),
            pos: self.pos.unwrap_or_default(),
            games: count(self.games),
            pts: count(self.pts),
            ast: count(self.ast),
            trb: count(self.trb),
            stl: count(self.stl),
            blk: count(self.blk),
            fga: count(self.fga),
            fta: count(self.fta),
            tov: count(self.tov),
        }
    }
}

impl PlayerSeasonRecord {
    /// Convenience constructor for the five scoring stats
    ///
    /// Shot attempts and turnovers start at 0; set them with `with_shooting`.
    pub fn new(
        player: &str,
        team: &str,
        pos: &str,
        games: f64,
        line: StatLine,
    ) -> Self {
        Self {
            player: player.to_string(),
            team: team.to_string(),
            pos: pos.to_string(),
            games,
            pts: line.pts,
            ast: line.ast,
            trb: line.trb,
            stl: line.stl,
            blk: line.blk,
            fga: 0.0,
            fta: 0.0,
            tov: 0.0,
        }
    }

    pub fn with_shooting(mut self, fga: f64, fta: f64, tov: f64) -> Self {
        self.fga = fga;
        self.fta = fta;
        self.tov = tov;
        self
    }

    /// The five stats every weighting formula reads
    pub fn stat_line(&self) -> StatLine {
        StatLine {
            pts: self.pts,
            ast: self.ast,
            trb: self.trb,
            stl: self.stl,
            blk: self.blk,
        }
    }
}

/// PTS / AST / TRB / STL / BLK
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub pts: f64,
    pub ast: f64,
    pub trb: f64,
    pub stl: f64,
    pub blk: f64,
}

impl StatLine {
    pub const fn new(pts: f64, ast: f64, trb: f64, stl: f64, blk: f64) -> Self {
        Self { pts, ast, trb, stl, blk }
    }

    /// Component-wise difference, used for player-vs-team deltas
    pub fn minus(&self, other: &StatLine) -> StatLine {
        StatLine {
            pts: self.pts - other.pts,
            ast: self.ast - other.ast,
            trb: self.trb - other.trb,
            stl: self.stl - other.stl,
            blk: self.blk - other.blk,
        }
    }

    /// Every component divided by `divisor`; a zero divisor yields zeros
    pub fn per(&self, divisor: f64) -> StatLine {
        if divisor <= 0.0 {
            return StatLine::default();
        }
        StatLine {
            pts: self.pts / divisor,
            ast: self.ast / divisor,
            trb: self.trb / divisor,
            stl: self.stl / divisor,
            blk: self.blk / divisor,
        }
    }
}
