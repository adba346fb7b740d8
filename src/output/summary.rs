use crate::model::Issues;
use crate::scan::ScanReport;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanSummary {
    pub timestamp: String,
    pub target: String,
    pub duration_sec: f64,
    pub tools: Vec<ToolSummary>,
    pub totals: HashMap<String, usize>,
    pub affected_files: usize,
    pub exit_code: i32,
    pub report_dir: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolSummary {
    pub id: String,
    pub files_scanned: usize,
    pub issues: usize,
    pub counts: HashMap<String, usize>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failed_files: Vec<String>,
}

pub fn build_summary(report: &ScanReport, target: &Path, report_dir: PathBuf) -> ScanSummary {
    let mut tools = Vec::new();

    for result in &report.tool_results {
        let mut counts = HashMap::new();
        counts.insert("high".to_string(), result.issues.high_priority_size());
        counts.insert("normal".to_string(), result.issues.normal_priority_size());
        counts.insert("low".to_string(), result.issues.low_priority_size());

        tools.push(ToolSummary {
            id: result.tool_id.clone(),
            files_scanned: result.files_scanned,
            issues: result.issues.size(),
            counts,
            failed_files: result
                .failed_files
                .iter()
                .map(|(path, error)| format!("{}: {}", path.display(), error))
                .collect(),
        });
    }

    let mut totals = HashMap::new();
    totals.insert("high".to_string(), report.issues.high_priority_size());
    totals.insert("normal".to_string(), report.issues.normal_priority_size());
    totals.insert("low".to_string(), report.issues.low_priority_size());

    let exit_code = if report.issues.high_priority_size() > 0 { 1 } else { 0 };

    ScanSummary {
        timestamp: Utc::now().to_rfc3339(),
        target: target.display().to_string(),
        duration_sec: report.total_duration.as_secs_f64(),
        tools,
        totals,
        affected_files: report.issues.affected_file_count(),
        exit_code,
        report_dir,
    }
}

pub fn build_summary_markdown(summary: &ScanSummary, issues: &Issues) -> String {
    let mut md = String::new();

    md.push_str("# warnsift Summary\n\n");
    md.push_str(&format!("**Generated:** {}\n", summary.timestamp));
    md.push_str(&format!("**Target:** {}\n", summary.target));
    md.push_str(&format!("**Duration:** {:.1}s\n\n", summary.duration_sec));

    md.push_str("## Totals\n\n");
    md.push_str("| Priority | Count |\n");
    md.push_str("|----------|-------|\n");
    md.push_str(&format!("| high | {} |\n", summary.totals.get("high").unwrap_or(&0)));
    md.push_str(&format!("| normal | {} |\n", summary.totals.get("normal").unwrap_or(&0)));
    md.push_str(&format!("| low | {} |\n\n", summary.totals.get("low").unwrap_or(&0)));
    md.push_str(&format!("**Affected files:** {}\n\n", summary.affected_files));

    md.push_str("## Tools\n\n");
    md.push_str("| Tool | Files | Issues |\n");
    md.push_str("|------|-------|--------|\n");
    for tool in &summary.tools {
        let counts = format!(
            "{} high, {} normal, {} low",
            tool.counts.get("high").unwrap_or(&0),
            tool.counts.get("normal").unwrap_or(&0),
            tool.counts.get("low").unwrap_or(&0),
        );
        md.push_str(&format!("| {} | {} | {} |\n", tool.id, tool.files_scanned, counts));
    }

    if !issues.is_empty() {
        md.push_str("\n## Issues\n\n");
        for issue in issues {
            md.push_str(&format!("- [{}] {}\n", issue.priority(), issue));
        }
    }

    let failed: Vec<_> = summary.tools.iter().flat_map(|t| &t.failed_files).collect();
    if !failed.is_empty() {
        md.push_str("\n## Failed files\n\n");
        for failure in failed {
            md.push_str(&format!("- {}\n", failure));
        }
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IssueBuilder, Priority};
    use crate::scan::ToolResult;
    use std::time::Duration;

    fn sample_report() -> ScanReport {
        let mut issues = Issues::new();
        let mut builder = IssueBuilder::new();
        issues.add(
            builder
                .file_name("src/A.java")
                .line_start(3)
                .kind("javac")
                .category("Deprecation")
                .priority(Priority::Normal)
                .message("deprecated API")
                .build(),
        );
        issues.add(
            builder
                .file_name("src/B.java")
                .line_start(10)
                .priority(Priority::High)
                .message("broken")
                .build(),
        );

        ScanReport {
            tool_results: vec![ToolResult {
                tool_id: "javac".to_string(),
                files_scanned: 2,
                issues: issues.clone(),
                failed_files: Vec::new(),
            }],
            issues,
            total_duration: Duration::from_millis(1200),
        }
    }

    #[test]
    fn summary_carries_totals_and_exit_code() {
        let report = sample_report();
        let summary = build_summary(&report, Path::new("."), PathBuf::from("reports"));

        assert_eq!(summary.totals["high"], 1);
        assert_eq!(summary.totals["normal"], 1);
        assert_eq!(summary.totals["low"], 0);
        assert_eq!(summary.affected_files, 2);
        assert_eq!(summary.exit_code, 1);
        assert_eq!(summary.tools.len(), 1);
        assert_eq!(summary.tools[0].issues, 2);
    }

    #[test]
    fn exit_code_is_zero_without_high_priority_issues() {
        let mut report = sample_report();
        let id = report
            .issues
            .iter()
            .find(|i| i.priority() == Priority::High)
            .map(|i| i.id())
            .unwrap();
        report.issues.remove(id).unwrap();

        let summary = build_summary(&report, Path::new("."), PathBuf::from("reports"));
        assert_eq!(summary.exit_code, 0);
    }

    #[test]
    fn markdown_lists_issues_in_display_format() {
        let report = sample_report();
        let summary = build_summary(&report, Path::new("."), PathBuf::from("reports"));
        let md = build_summary_markdown(&summary, &report.issues);

        assert!(md.contains("# warnsift Summary"));
        assert!(md.contains("| javac | 2 |"));
        assert!(md.contains("- [normal] src/A.java(3,0): javac: Deprecation: deprecated API"));
    }
}
