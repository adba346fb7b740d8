use crate::config::Config;
use crate::discovery::resolve_logs;
use crate::error::{ParsingError, ScanError};
use crate::model::{Issue, Issues};
use crate::registry::ParserRegistry;
use futures::stream::{FuturesUnordered, StreamExt};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Restrict the scan to these tool ids.
    pub tool_filter: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ScanReport {
    pub tool_results: Vec<ToolResult>,
    /// All issues of all tools, merged after the parallel parses completed.
    pub issues: Issues,
    pub total_duration: Duration,
}

#[derive(Debug)]
pub struct ToolResult {
    pub tool_id: String,
    pub files_scanned: usize,
    pub issues: Issues,
    /// Files whose parse aborted; their partial results are discarded.
    pub failed_files: Vec<(PathBuf, String)>,
}

/// Runs every configured tool over its discovered log files. Each (tool,
/// file) parse is an independent synchronous pass; the scanner fans them out
/// with a bounded number of blocking tasks and merges the collections once
/// all parses are done, so the merged container only ever has one writer.
pub struct Scanner {
    config: Config,
    semaphore: Arc<Semaphore>,
}

impl Scanner {
    pub fn new(config: Config) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
        Self { config, semaphore }
    }

    pub async fn run(
        &self,
        registry: &ParserRegistry,
        options: &ScanOptions,
    ) -> Result<ScanReport, ScanError> {
        let start = std::time::Instant::now();

        let tools: Vec<_> = self
            .config
            .tools
            .iter()
            .filter(|t| t.enabled)
            .filter(|t| {
                options
                    .tool_filter
                    .as_ref()
                    .map(|f| f.contains(&t.id))
                    .unwrap_or(true)
            })
            .collect();

        if tools.is_empty() {
            return Err(ScanError::NoToolsMatched);
        }

        let mut futures = FuturesUnordered::new();
        for tool in &tools {
            let files = resolve_logs(&self.config.target, tool)?;
            info!("{}: {} log files", tool.id, files.len());

            for file in files {
                let permit = self.semaphore.clone().acquire_owned().await?;
                let parser = registry.create(&tool.id)?;
                let path = self.config.target.join(&file);
                let tool_id = tool.id.clone();

                futures.push(tokio::task::spawn_blocking(move || {
                    let _permit = permit; // hold until done
                    let outcome = parse_file(parser.as_ref(), &path);
                    (tool_id, file, outcome)
                }));
            }
        }

        let mut parses: Vec<(String, PathBuf, Result<Issues, ParsingError>)> = Vec::new();
        while let Some(joined) = futures.next().await {
            match joined {
                Ok(outcome) => parses.push(outcome),
                Err(e) => warn!("Parse task panicked: {}", e),
            }
        }

        // Completion order is nondeterministic; sort to keep reports stable.
        parses.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

        let mut by_tool: std::collections::BTreeMap<String, ToolResult> =
            std::collections::BTreeMap::new();
        for (tool_id, file, outcome) in parses {
            let result = by_tool.entry(tool_id.clone()).or_insert_with(|| ToolResult {
                tool_id,
                files_scanned: 0,
                issues: Issues::new(),
                failed_files: Vec::new(),
            });
            result.files_scanned += 1;
            match outcome {
                Ok(issues) => result.issues.add_all(stamp_fingerprints(issues)),
                Err(e) => {
                    warn!("{}: failed to parse {}: {}", result.tool_id, file.display(), e);
                    result.failed_files.push((file, e.to_string()));
                }
            }
        }
        let tool_results: Vec<ToolResult> = by_tool.into_values().collect();

        let issues = Issues::merge(tool_results.iter().map(|r| r.issues.clone()));

        Ok(ScanReport {
            tool_results,
            issues,
            total_duration: start.elapsed(),
        })
    }
}

fn parse_file(
    parser: &dyn crate::parser::IssueParser,
    path: &std::path::Path,
) -> Result<Issues, ParsingError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    parser.parse(&mut reader)
}

/// Seeds each issue's fingerprint with its content digest so downstream
/// consumers can correlate findings across runs. Fingerprints a parser
/// assigned itself are left alone.
fn stamp_fingerprints(issues: Issues) -> Issues {
    issues
        .into_iter()
        .map(|mut issue: Issue| {
            if !issue.has_fingerprint() {
                let digest = issue.digest();
                issue.set_fingerprint(digest);
            }
            issue
        })
        .collect()
}
