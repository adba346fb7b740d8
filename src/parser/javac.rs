use super::{guess_category_if_empty, parse_coordinate, LookaheadParser, LookaheadStream};
use crate::error::ParsingError;
use crate::model::{Issue, IssueBuilder, Priority};
use regex::{Captures, Regex};

const JAVAC_WARNING_PATTERN: &str = concat!(
    // optional timestamp prefix
    r"^(?:\S+\s+)?",
    // [WARNING], [ERROR] or the kotlinc w: marker
    r"(?:(?:\[(?P<severity>WARNING|ERROR)\]|w:)\s+)",
    r"(?P<file>[^\[\(]*):\s*",
    r"[\[\(]",
    r"(?P<line>\d+)[.,;]*",
    r"\s?(?P<column>\d+)?",
    r"[\]\)]\s*",
    r":?",
    r"(?:\[(?P<category>\w+)\])?",
    r"\s*(?P<message>.*)$",
);

// Error Prone repeats its explanation on a URL-only follow-up line; the
// duplicate header right before it must not become a second issue.
const ERRORPRONE_URL_PATTERN: &str = r"\s+\(see https?://errorprone\S+\s*\)";

/// A parser for javac compiler warnings as they appear in maven and ant
/// console logs.
pub struct JavacParser {
    pattern: Regex,
    errorprone_url: Regex,
}

impl JavacParser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(JAVAC_WARNING_PATTERN).expect("javac pattern compiles"),
            errorprone_url: Regex::new(ERRORPRONE_URL_PATTERN).expect("errorprone pattern compiles"),
        }
    }
}

impl Default for JavacParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LookaheadParser for JavacParser {
    fn id(&self) -> &'static str {
        "javac"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn is_line_interesting(&self, line: &str) -> bool {
        line.contains('[') || line.contains("w:")
    }

    fn create_issue(
        &self,
        captures: &Captures<'_>,
        lookahead: &mut LookaheadStream<'_>,
        builder: &mut IssueBuilder,
    ) -> Result<Option<Issue>, ParsingError> {
        if lookahead.next_matches(&self.errorprone_url)? {
            return Ok(None);
        }

        let severity = captures.name("severity").map(|m| m.as_str());
        let priority = if severity == Some("ERROR") {
            Priority::High
        } else {
            Priority::Normal
        };

        let message = captures.name("message").map(|m| m.as_str()).unwrap_or_default();
        let category =
            guess_category_if_empty(captures.name("category").map(|m| m.as_str()), message);

        let issue = builder
            .priority(priority)
            .file_name(captures.name("file").map(|m| m.as_str()).unwrap_or_default())
            .line_start(parse_coordinate(captures.name("line").map(|m| m.as_str())))
            .column_start(parse_coordinate(captures.name("column").map(|m| m.as_str())))
            .category(category)
            .message(message)
            .build();
        Ok(Some(issue))
    }
}
