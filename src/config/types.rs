use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Root directory the log globs are resolved against.
    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Maximum number of concurrent (tool, file) parses.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    #[serde(default)]
    pub tools: Vec<ToolConfig>,
}

/// One build tool whose logs should be scanned.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ToolConfig {
    /// Identifier of a registered parser (e.g. `javac`, `eclipse`, `gcc4`).
    pub id: String,

    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Include globs for the log files of this tool, relative to `target`.
    pub logs: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}
