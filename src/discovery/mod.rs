use crate::config::ToolConfig;
use crate::error::DiscoveryError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Resolves the log files of a tool: walks `target`, keeps files matching
/// the tool's include globs and drops the excluded ones. Paths are returned
/// relative to `target`, sorted.
pub fn resolve_logs(target: &Path, tool: &ToolConfig) -> Result<Vec<PathBuf>, DiscoveryError> {
    let include_set = build_globset(&tool.logs)?;
    let exclude_set = build_globset(&tool.exclude)?;

    let mut files = Vec::new();

    let walker = WalkBuilder::new(target)
        .hidden(true) // skip hidden files
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .build();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let rel_path = path.strip_prefix(target).unwrap_or(path);

        if !include_set.is_match(rel_path) {
            continue;
        }
        if exclude_set.is_match(rel_path) {
            continue;
        }

        files.push(rel_path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, DiscoveryError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| DiscoveryError::GlobPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| DiscoveryError::GlobPattern {
        pattern: "glob set".to_string(),
        source: e,
    })
}
