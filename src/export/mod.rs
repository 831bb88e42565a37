//! Export formats for a finished ranking
//!
//! - `csv`: flat candidates table (enhanced and legacy basic)
//! - `json`: structured analysis summary
//! - `console`: fixed-width top-N listing
//! - `view`: CSV and JSON of a filtered player view

pub mod console;
pub mod csv;
pub mod json;
pub mod types;
pub mod view;

pub use console::format_top_candidates;
pub use csv::{
    basic_candidates_frame, candidates_frame, write_basic_candidates_csv, write_candidates_csv,
    BASIC_COLUMNS, CANDIDATE_COLUMNS,
};
pub use json::{write_summary_json, JsonFormatter};
pub use types::{AnalysisSummary, PositionSummary, TeamSummary, TopPlayer};
pub use view::{view_frame, write_view_csv, write_view_json, ViewExport, VIEW_COLUMNS};
