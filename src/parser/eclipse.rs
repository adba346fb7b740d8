use super::{parse_coordinate, LookaheadParser, LookaheadStream};
use crate::error::ParsingError;
use crate::model::{Issue, IssueBuilder, Priority};
use regex::{Captures, Regex};

const ECLIPSE_FIRST_LINE_PATTERN: &str =
    r"\d+\.\s*(?P<severity>WARNING|ERROR|INFO) in (?P<file>.*?)\s*\(at line (?P<line>\d+)\)";

const DIVIDER_PATTERN: &str = r"-{10}";

// Strips an ant task prefix such as "[javac] " from a context line.
const MESSAGE_PATTERN: &str = r"^(?:.*\[.*\])?\s*(?P<message>.*)";

const WARNING: &str = "WARNING";
const ERROR: &str = "ERROR";
const INFO: &str = "INFO";

/// A parser for Eclipse (ECJ) batch compiler warnings.
///
/// The compiler reports each finding as a block: a numbered header line with
/// severity, file and line, followed by a source excerpt and the message,
/// closed by a dashed divider. After a header matches, the continuation lines
/// are accumulated until the divider, a blank line, or the end of input; the
/// last accumulated line carries the message. Blocks without a header produce
/// nothing.
pub struct EclipseParser {
    pattern: Regex,
    divider: Regex,
    message: Regex,
}

impl EclipseParser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(ECLIPSE_FIRST_LINE_PATTERN).expect("eclipse pattern compiles"),
            divider: Regex::new(DIVIDER_PATTERN).expect("divider pattern compiles"),
            message: Regex::new(MESSAGE_PATTERN).expect("message pattern compiles"),
        }
    }

    fn extract_message(&self, builder: &mut IssueBuilder, line: &str) {
        if let Some(captures) = self.message.captures(line) {
            if let Some(message) = captures.name("message") {
                builder.message(message.as_str());
            }
        }
    }
}

impl Default for EclipseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LookaheadParser for EclipseParser {
    fn id(&self) -> &'static str {
        "eclipse"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn is_line_interesting(&self, line: &str) -> bool {
        line.contains(WARNING) || line.contains(ERROR) || line.contains(INFO)
    }

    fn create_issue(
        &self,
        captures: &Captures<'_>,
        lookahead: &mut LookaheadStream<'_>,
        builder: &mut IssueBuilder,
    ) -> Result<Option<Issue>, ParsingError> {
        builder
            .priority(Priority::from_severity(
                captures.name("severity").map(|m| m.as_str()).unwrap_or_default(),
            ))
            .file_name(captures.name("file").map(|m| m.as_str()).unwrap_or_default())
            .line_start(parse_coordinate(captures.name("line").map(|m| m.as_str())))
            .message("");

        let mut context: Vec<String> = Vec::new();
        while lookahead.has_next()? && !lookahead.next_matches(&self.divider)? {
            if lookahead.peek()?.is_some_and(|next| next.trim().is_empty()) {
                break;
            }
            match lookahead.next_line()? {
                Some(line) => context.push(line),
                None => break,
            }
        }

        if let Some(last) = context.last() {
            self.extract_message(builder, last);
        }

        Ok(Some(builder.build()))
    }
}
