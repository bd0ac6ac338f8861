// src/reporting/json.rs
use crate::reporting::Report;
use anyhow::Result;

/// Serializes the report for machine consumption. Grouping and empty-group
/// suppression are identical to the text renderer; only the framing differs.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
