mod eclipse;
mod gcc4;
mod javac;
mod lookahead;

pub use eclipse::EclipseParser;
pub use gcc4::Gcc4Parser;
pub use javac::JavacParser;
pub use lookahead::LookaheadStream;

use crate::error::ParsingError;
use crate::model::{Issue, IssueBuilder, Issues};
use regex::{Captures, Regex};
use std::io::BufRead;

/// Category for warnings due to usage of deprecated API.
pub const DEPRECATION: &str = "Deprecation";
/// Category for warnings due to usage of proprietary API.
pub const PROPRIETARY_API: &str = "Proprietary API";

/// Converts a line-oriented text stream into a collection of issues.
///
/// Parsing is a synchronous single pass. Lines that match no recognized
/// pattern are skipped; only a failure to read the underlying input aborts
/// the parse, discarding anything accumulated so far.
pub trait IssueParser: Send + Sync {
    /// Stable identifier of this parser, stamped into every emitted issue as
    /// its kind.
    fn id(&self) -> &'static str;

    fn parse(&self, reader: &mut dyn BufRead) -> Result<Issues, ParsingError>;

    /// Parses in-memory text, mainly for tests and small inputs.
    fn parse_str(&self, text: &str) -> Result<Issues, ParsingError> {
        self.parse(&mut std::io::Cursor::new(text))
    }
}

/// Template for regex-driven line scanners. The scan loop is shared: each
/// line is cheaply pre-filtered, matched against the header pattern, and
/// handed to [`create_issue`](LookaheadParser::create_issue) together with
/// the lookahead stream so the parser can consume continuation lines.
///
/// Every implementor is an [`IssueParser`] through the blanket impl below.
pub trait LookaheadParser: Send + Sync {
    fn id(&self) -> &'static str;

    fn pattern(&self) -> &Regex;

    /// Cheap containment check applied before the regex; lets parsers skip
    /// the bulk of ordinary build chatter quickly.
    fn is_line_interesting(&self, _line: &str) -> bool {
        true
    }

    /// Builds an issue from a header match. Returning `Ok(None)` drops a
    /// false positive. The builder arrives pre-stamped with this parser's id
    /// and keeps its settings between calls.
    fn create_issue(
        &self,
        captures: &Captures<'_>,
        lookahead: &mut LookaheadStream<'_>,
        builder: &mut IssueBuilder,
    ) -> Result<Option<Issue>, ParsingError>;
}

impl<P: LookaheadParser> IssueParser for P {
    fn id(&self) -> &'static str {
        LookaheadParser::id(self)
    }

    fn parse(&self, reader: &mut dyn BufRead) -> Result<Issues, ParsingError> {
        let mut issues = Issues::new();
        let mut builder = IssueBuilder::new();
        builder.kind(LookaheadParser::id(self));

        let mut lookahead = LookaheadStream::new(reader);
        while let Some(line) = lookahead.next_line()? {
            if !self.is_line_interesting(&line) {
                continue;
            }
            if let Some(captures) = self.pattern().captures(&line) {
                if let Some(issue) = self.create_issue(&captures, &mut lookahead, &mut builder)? {
                    issues.add(issue);
                }
            }
        }

        tracing::debug!("{}: extracted {}", LookaheadParser::id(self), issues);
        Ok(issues)
    }
}

/// Converts a captured line or column number to an integer. Absent or
/// malformed captures mean "whole file"/"whole line" and yield 0.
pub(crate) fn parse_coordinate(capture: Option<&str>) -> i64 {
    capture.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Tries to guess a category from the warning message; empty if unknown.
pub(crate) fn guess_category(message: &str) -> &'static str {
    if message.contains("proprietary") {
        PROPRIETARY_API
    } else if message.contains("deprecated") {
        DEPRECATION
    } else {
        ""
    }
}

/// Capitalizes the provided category, falling back to a guess from the
/// message text when the tool reported none.
pub(crate) fn guess_category_if_empty(category: Option<&str>, message: &str) -> String {
    match category.map(str::trim) {
        Some(category) if !category.is_empty() => capitalize(category),
        _ => guess_category(message).to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
