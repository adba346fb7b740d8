use regex::Regex;
use std::io::{self, BufRead};

/// A stream of lines with a lookahead of one line. Multi-line parsers use it
/// to decide whether the next line continues the current finding before
/// consuming it.
///
/// Line terminators are stripped. Read failures surface as [`io::Error`] and
/// abort the parse in progress.
pub struct LookaheadStream<'a> {
    reader: &'a mut dyn BufRead,
    lookahead: Option<String>,
    exhausted: bool,
    line_number: usize,
}

impl<'a> LookaheadStream<'a> {
    pub fn new(reader: &'a mut dyn BufRead) -> Self {
        Self {
            reader,
            lookahead: None,
            exhausted: false,
            line_number: 0,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        if self.lookahead.is_some() || self.exhausted {
            return Ok(());
        }
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            self.exhausted = true;
        } else {
            while buffer.ends_with('\n') || buffer.ends_with('\r') {
                buffer.pop();
            }
            self.lookahead = Some(buffer);
        }
        Ok(())
    }

    /// Returns `true` if the stream has more lines.
    pub fn has_next(&mut self) -> io::Result<bool> {
        self.fill()?;
        Ok(self.lookahead.is_some())
    }

    /// Returns `true` if the next line matches the given pattern without
    /// consuming it.
    pub fn next_matches(&mut self, pattern: &Regex) -> io::Result<bool> {
        self.fill()?;
        Ok(self.lookahead.as_deref().is_some_and(|line| pattern.is_match(line)))
    }

    /// Returns the next line without consuming it.
    pub fn peek(&mut self) -> io::Result<Option<&str>> {
        self.fill()?;
        Ok(self.lookahead.as_deref())
    }

    /// Consumes and returns the next line, or `None` at the end of the stream.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.fill()?;
        let line = self.lookahead.take();
        if line.is_some() {
            self.line_number += 1;
        }
        Ok(line)
    }

    /// 1-based number of the line most recently returned by
    /// [`next_line`](LookaheadStream::next_line).
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stream_over(text: &'static str) -> Cursor<&'static str> {
        Cursor::new(text)
    }

    #[test]
    fn yields_lines_without_terminators() {
        let mut reader = stream_over("one\ntwo\r\nthree");
        let mut stream = LookaheadStream::new(&mut reader);

        assert_eq!(stream.next_line().unwrap().as_deref(), Some("one"));
        assert_eq!(stream.next_line().unwrap().as_deref(), Some("two"));
        assert_eq!(stream.next_line().unwrap().as_deref(), Some("three"));
        assert_eq!(stream.next_line().unwrap(), None);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut reader = stream_over("first\nsecond\n");
        let mut stream = LookaheadStream::new(&mut reader);

        assert_eq!(stream.peek().unwrap(), Some("first"));
        assert_eq!(stream.peek().unwrap(), Some("first"));
        assert_eq!(stream.next_line().unwrap().as_deref(), Some("first"));
        assert_eq!(stream.next_line().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn next_matches_checks_the_upcoming_line() {
        let mut reader = stream_over("header\n  continuation\nother\n");
        let mut stream = LookaheadStream::new(&mut reader);
        let continuation = Regex::new(r"^\s+\S").unwrap();

        stream.next_line().unwrap();
        assert!(stream.next_matches(&continuation).unwrap());
        stream.next_line().unwrap();
        assert!(!stream.next_matches(&continuation).unwrap());
    }

    #[test]
    fn tracks_line_numbers() {
        let mut reader = stream_over("a\nb\n");
        let mut stream = LookaheadStream::new(&mut reader);

        assert_eq!(stream.line_number(), 0);
        stream.next_line().unwrap();
        assert_eq!(stream.line_number(), 1);
        stream.peek().unwrap();
        assert_eq!(stream.line_number(), 1);
        stream.next_line().unwrap();
        assert_eq!(stream.line_number(), 2);
    }

    #[test]
    fn has_next_is_false_at_end_of_stream() {
        let mut reader = stream_over("");
        let mut stream = LookaheadStream::new(&mut reader);

        assert!(!stream.has_next().unwrap());
        assert_eq!(stream.next_line().unwrap(), None);
    }
}
