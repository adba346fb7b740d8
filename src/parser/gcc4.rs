use super::{parse_coordinate, LookaheadParser, LookaheadStream};
use crate::error::ParsingError;
use crate::model::{Issue, IssueBuilder, Priority};
use regex::{Captures, Regex};

const GCC_WARNING_PATTERN: &str = concat!(
    r"^(?:.*\[.*\])?\s*",
    r"(?P<file>.+?):(?P<line>\d+):(?:(?P<column>\d+):)?",
    r" ?(?P<severity>[wW]arning|.*[Ee]rror): (?P<message>.*)$",
);

// gcc appends the diagnostic class as a [-Wclass] suffix on the message.
const CLASS_PATTERN: &str = r"\[-W(?P<class>.+)\]$";

/// A parser for gcc 4.x compiler warnings.
///
/// Messages may span several lines; continuation lines are appended until a
/// line starts looking like a new diagnostic, a path, or make chatter.
pub struct Gcc4Parser {
    pattern: Regex,
    class: Regex,
}

impl Gcc4Parser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(GCC_WARNING_PATTERN).expect("gcc pattern compiles"),
            class: Regex::new(CLASS_PATTERN).expect("class pattern compiles"),
        }
    }

    fn is_message_continuation(peek: &str) -> bool {
        let chars: Vec<char> = peek.chars().take(3).collect();
        if chars.len() < 3 {
            return false;
        }
        if matches!(chars[0], '/' | '[' | '<' | '=' | '\\') {
            return false;
        }
        if chars[1] == ':' {
            return false;
        }
        if chars[2] == '/' {
            return false;
        }
        let lowered = peek.to_lowercase();
        !(lowered.contains("arning") || lowered.contains("rror") || lowered.contains("make"))
    }
}

impl Default for Gcc4Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl LookaheadParser for Gcc4Parser {
    fn id(&self) -> &'static str {
        "gcc4"
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn is_line_interesting(&self, line: &str) -> bool {
        line.contains("arning") || line.contains("rror")
    }

    fn create_issue(
        &self,
        captures: &Captures<'_>,
        lookahead: &mut LookaheadStream<'_>,
        builder: &mut IssueBuilder,
    ) -> Result<Option<Issue>, ParsingError> {
        let mut message = captures.name("message").map(|m| m.as_str()).unwrap_or_default().to_string();

        builder.category("");
        if let Some(class) = self.class.captures(&message).and_then(|c| c.name("class")) {
            builder.category(class.as_str());
        }

        while lookahead.peek()?.is_some_and(Self::is_message_continuation) {
            if let Some(line) = lookahead.next_line()? {
                message.push('\n');
                message.push_str(&line);
            }
        }

        let severity = captures.name("severity").map(|m| m.as_str()).unwrap_or_default();
        let issue = builder
            .file_name(captures.name("file").map(|m| m.as_str()).unwrap_or_default())
            .line_start(parse_coordinate(captures.name("line").map(|m| m.as_str())))
            .column_start(parse_coordinate(captures.name("column").map(|m| m.as_str())))
            .priority(Priority::from_severity(severity))
            .message(message)
            .build();
        Ok(Some(issue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::IssueParser;

    const GCC_LOG: &str = include_str!("../../tests/fixtures/gcc4.txt");

    #[test]
    fn parses_warnings_and_errors_from_gcc_log() {
        let issues = Gcc4Parser::new().parse_str(GCC_LOG).unwrap();

        assert_eq!(issues.size(), 5);
        assert_eq!(issues.normal_priority_size(), 3);
        assert_eq!(issues.high_priority_size(), 2);

        let first = issues.get(0).unwrap();
        assert_eq!(first.file_name(), "main.c");
        assert_eq!(first.line_start(), 451);
        assert_eq!(first.column_start(), 5);
        assert_eq!(first.priority(), Priority::Normal);
        assert_eq!(first.category(), "memset-transposed-args");
        assert_eq!(first.kind(), "gcc4");

        let third = issues.get(2).unwrap();
        assert_eq!(third.priority(), Priority::High);
        assert_eq!(third.message(), "'foo' undeclared (first use in this function)");
    }

    #[test]
    fn missing_column_defaults_to_zero() {
        let issues = Gcc4Parser::new().parse_str(GCC_LOG).unwrap();

        let last = issues.get(4).unwrap();
        assert_eq!(last.file_name(), "helper.c");
        assert_eq!(last.line_start(), 33);
        assert_eq!(last.column_start(), 0);
    }

    #[test]
    fn continuation_lines_are_appended_to_the_message() {
        let log = concat!(
            "main.c:10:5: error: invalid operands to binary + (have 'struct s' and 'int')\n",
            "   candidate expects 2 arguments, 3 provided\n",
            "main.c:20:1: warning: control reaches end of non-void function\n",
        );
        let issues = Gcc4Parser::new().parse_str(log).unwrap();

        assert_eq!(issues.size(), 2);
        assert_eq!(
            issues.get(0).unwrap().message(),
            "invalid operands to binary + (have 'struct s' and 'int')\n   candidate expects 2 arguments, 3 provided"
        );
        assert_eq!(issues.get(1).unwrap().line_start(), 20);
    }

    #[test]
    fn category_is_cleared_between_matches() {
        let log = concat!(
            "a.c:1:1: warning: unused variable 'x' [-Wunused-variable]\n",
            "b.c:2:2: warning: no class suffix here\n",
        );
        let issues = Gcc4Parser::new().parse_str(log).unwrap();

        assert_eq!(issues.get(0).unwrap().category(), "unused-variable");
        assert_eq!(issues.get(1).unwrap().category(), "");
    }

    #[test]
    fn make_chatter_is_ignored() {
        let log = concat!(
            "make[2]: Entering directory '/build/src'\n",
            "gcc -c main.c -o main.o\n",
            "main.c:3:1: warning: something minor\n",
            "make[2]: Leaving directory '/build/src'\n",
        );
        let issues = Gcc4Parser::new().parse_str(log).unwrap();

        assert_eq!(issues.size(), 1);
    }
}
