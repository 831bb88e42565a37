use crate::export::types::AnalysisSummary;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// JSON formatter for analysis summaries
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format summary as pretty-printed JSON
    pub fn format(summary: &AnalysisSummary) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(summary)
    }

    /// Format summary as compact JSON (no whitespace)
    pub fn format_compact(summary: &AnalysisSummary) -> Result<String, serde_json::Error> {
        serde_json::to_string(summary)
    }
}

/// Write the pretty-printed summary to `path`
pub fn write_summary_json(path: &Path, summary: &AnalysisSummary) -> Result<()> {
    let json = JsonFormatter::format(summary).context("Failed to serialize analysis summary")?;
    fs::write(path, json).with_context(|| format!("Failed to write summary JSON: {:?}", path))?;
    info!("Analysis exported to {:?}", path);
    Ok(())
}
