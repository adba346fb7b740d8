use super::summary::{build_summary_markdown, ScanSummary};
use crate::error::OutputError;
use crate::model::Issues;
use std::fs;
use std::path::Path;

/// Writes the scan artifacts: the full issue list as JSON plus the summary
/// in JSON and Markdown.
pub fn write_reports(
    report_dir: &Path,
    summary: &ScanSummary,
    issues: &Issues,
) -> Result<(), OutputError> {
    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let issues_json = serde_json::to_string_pretty(issues)?;
    fs::write(report_dir.join("issues.json"), issues_json).map_err(OutputError::WriteReport)?;

    let summary_json = serde_json::to_string_pretty(summary)?;
    fs::write(report_dir.join("summary.json"), summary_json).map_err(OutputError::WriteReport)?;

    let summary_md = build_summary_markdown(summary, issues);
    fs::write(report_dir.join("summary.md"), summary_md).map_err(OutputError::WriteReport)?;

    Ok(())
}
