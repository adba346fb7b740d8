use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Placeholder for text fields that were not reported by the tool.
pub const UNDEFINED: &str = "-";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    /// Maps a tool-specific severity token to a priority. Tokens containing
    /// "error" rank high, informational markers rank low, everything else is
    /// a normal warning.
    pub fn from_severity(token: &str) -> Self {
        let token = token.to_lowercase();
        if token.contains("error") {
            Priority::High
        } else if token.contains("info") || token.contains("note") {
            Priority::Low
        } else {
            Priority::Normal
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Normal => write!(f, "normal"),
            Priority::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" | "error" => Ok(Priority::High),
            "normal" | "warning" => Ok(Priority::Normal),
            "low" | "info" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// One finding extracted from a tool's output. Instances are created through
/// [`IssueBuilder`](crate::model::IssueBuilder), which normalizes every field;
/// apart from the fingerprint an issue never changes after construction.
///
/// The generated `id` identifies the instance within the process and is
/// excluded from equality: two issues with the same normalized content are
/// equal even though their ids differ.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub(super) id: Uuid,

    pub(super) file_name: String,
    pub(super) line_start: u32,
    pub(super) line_end: u32,
    pub(super) column_start: u32,
    pub(super) column_end: u32,

    pub(super) category: String,

    #[serde(rename = "type")]
    pub(super) kind: String,

    pub(super) package_name: String,
    pub(super) priority: Priority,
    pub(super) message: String,
    pub(super) description: String,

    pub(super) fingerprint: String,
}

impl Issue {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// First line of this issue (lines start at 1; 0 indicates the whole file).
    pub fn line_start(&self) -> u32 {
        self.line_start
    }

    pub fn line_end(&self) -> u32 {
        self.line_end
    }

    /// First column of this issue (columns start at 1, 0 indicates the whole line).
    pub fn column_start(&self) -> u32 {
        self.column_start
    }

    pub fn column_end(&self) -> u32 {
        self.column_end
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Identifier of the parser that produced this issue.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Fingerprint used by external consumers to correlate the same finding
    /// across separate parses. Defaults to `"-"` until assigned.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Replaces the fingerprint. A blank value re-applies the `"-"` default.
    pub fn set_fingerprint(&mut self, fingerprint: impl Into<String>) {
        let fingerprint = fingerprint.into();
        let stripped = fingerprint.trim();
        self.fingerprint = if stripped.is_empty() {
            UNDEFINED.to_string()
        } else {
            stripped.to_string()
        };
    }

    pub fn has_fingerprint(&self) -> bool {
        self.fingerprint != UNDEFINED
    }

    pub fn has_package_name(&self) -> bool {
        self.package_name != UNDEFINED
    }

    /// Deterministic digest over the normalized identity fields, suitable as
    /// a fingerprint seed for cross-run correlation.
    pub fn digest(&self) -> String {
        let input = format!(
            "{}|{}|{}|{}|{}|{}",
            self.file_name, self.line_start, self.column_start, self.kind, self.category, self.message,
        );
        let hash = Sha256::digest(input.as_bytes());
        format!("{:x}", hash)[..12].to_string()
    }
}

// The id and the fingerprint both vary independently of the issue's content
// and stay out of equality and hashing.
impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.file_name == other.file_name
            && self.line_start == other.line_start
            && self.line_end == other.line_end
            && self.column_start == other.column_start
            && self.column_end == other.column_end
            && self.category == other.category
            && self.kind == other.kind
            && self.package_name == other.package_name
            && self.priority == other.priority
            && self.message == other.message
            && self.description == other.description
    }
}

impl Eq for Issue {}

impl Hash for Issue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.file_name.hash(state);
        self.line_start.hash(state);
        self.line_end.hash(state);
        self.column_start.hash(state);
        self.column_end.hash(state);
        self.category.hash(state);
        self.kind.hash(state);
        self.package_name.hash(state);
        self.priority.hash(state);
        self.message.hash(state);
        self.description.hash(state);
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{}): {}: {}: {}",
            self.file_name, self.line_start, self.column_start, self.kind, self.category, self.message,
        )
    }
}
