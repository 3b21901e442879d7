//! Logical line reading for OBO sources.
//!
//! This module turns physical lines into logical lines: continuation lines are
//! joined, blank and comment-only lines are dropped, and every logical line
//! remembers the physical line it started on for warnings.

use std::io::{self, BufRead, BufReader, Read};

use crate::escape::trailing_backslashes;

/// One logical line of an OBO source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the physical line this logical line starts on.
    pub line_number: usize,
    /// The line text, continuations joined, line terminator removed.
    pub text: String,
}

/// Reader producing [`LogicalLine`]s from an OBO source.
///
/// A physical line ending in an odd number of backslashes continues on the
/// next physical line: the unpaired backslash and the line break are removed.
/// An even number of trailing backslashes is just a run of escaped
/// backslashes and is left for the decoder.
///
/// Invalid UTF-8 is replaced rather than reported, so a single bad byte never
/// stops an import.
///
/// # Examples
///
/// ```
/// use vocab_obo::reader::LineReader;
///
/// let source = "name: split \\\n  across lines\n\n! comment\nid: A\n";
/// let lines: Vec<_> = LineReader::new(source.as_bytes())
///     .map(|line| line.unwrap().text)
///     .collect();
/// assert_eq!(lines, vec!["name: split   across lines", "id: A"]);
/// ```
pub struct LineReader<R> {
    /// Buffered reader wrapping the underlying source.
    reader: BufReader<R>,
    /// Number of physical lines consumed so far.
    line_number: usize,
    /// Scratch buffer for raw line bytes.
    buf: Vec<u8>,
}

impl<R: Read> LineReader<R> {
    /// Creates a new `LineReader` wrapping the given reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Creates a new `LineReader` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Returns the number of physical lines read so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next logical line, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    pub fn read_logical(&mut self) -> io::Result<Option<LogicalLine>> {
        while let Some(mut text) = self.read_physical()? {
            let line_number = self.line_number;

            while is_continued(&text) {
                text.pop();
                match self.read_physical()? {
                    Some(next) => text.push_str(&next),
                    None => {
                        tracing::trace!(line_number, "continuation at end of input");
                        break;
                    }
                }
            }

            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('!') {
                continue;
            }

            return Ok(Some(LogicalLine { line_number, text }));
        }
        Ok(None)
    }

    fn read_physical(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        let mut line = String::from_utf8_lossy(&self.buf).into_owned();
        if self.line_number == 1 && line.starts_with('\u{feff}') {
            line.remove(0);
        }
        Ok(Some(line))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = io::Result<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_logical().transpose()
    }
}

/// Returns `true` if `line` ends in an unpaired escape character.
#[must_use]
pub fn is_continued(line: &str) -> bool {
    trailing_backslashes(line) % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn logical(source: &str) -> Vec<LogicalLine> {
        LineReader::new(source.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    fn texts(source: &str) -> Vec<String> {
        logical(source).into_iter().map(|line| line.text).collect()
    }

    #[test]
    fn new_reader_starts_at_line_zero() {
        let reader = LineReader::new(&b""[..]);
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn with_capacity_creates_reader() {
        let mut reader = LineReader::with_capacity(&b"id: A\n"[..], 16);
        let line = reader.read_logical().unwrap().unwrap();
        assert_eq!(line.text, "id: A");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(logical("").is_empty());
    }

    #[test]
    fn blank_and_comment_lines_are_dropped() {
        let source = "\n   \n! a comment\n  ! indented comment\nid: A\n";
        assert_eq!(texts(source), vec!["id: A"]);
    }

    #[test]
    fn line_numbers_point_at_physical_lines() {
        let source = "\n[Term]\n\nid: A\n";
        let lines = logical(source);
        assert_eq!(lines[0].line_number, 2);
        assert_eq!(lines[1].line_number, 4);
    }

    #[test]
    fn crlf_terminators_are_removed() {
        assert_eq!(texts("id: A\r\nname: B\r\n"), vec!["id: A", "name: B"]);
    }

    #[test]
    fn last_line_without_terminator_is_read() {
        assert_eq!(texts("id: A\nname: B"), vec!["id: A", "name: B"]);
    }

    #[test]
    fn odd_trailing_backslashes_continue_the_line() {
        let source = "name: Values can be continued \\\non the next line\nid: A\n";
        let lines = logical(source);
        assert_eq!(lines[0].text, "name: Values can be continued on the next line");
        assert_eq!(lines[0].line_number, 1);
        assert_eq!(lines[1].line_number, 3);
    }

    #[test]
    fn three_trailing_backslashes_continue_and_keep_a_pair() {
        let source = "name: a\\\\\\\nb\n";
        assert_eq!(texts(source), vec!["name: a\\\\b"]);
    }

    #[test]
    fn even_trailing_backslashes_do_not_continue() {
        let source = "name: ends with\\\\\nid: A\n";
        assert_eq!(texts(source), vec!["name: ends with\\\\", "id: A"]);
    }

    #[test]
    fn tag_names_can_be_continued() {
        let source = "de\\\nf: tag names can also be continued\n";
        assert_eq!(texts(source), vec!["def: tag names can also be continued"]);
    }

    #[test]
    fn continuation_chains_across_several_lines() {
        let source = "name: a\\\nb\\\nc\n";
        assert_eq!(texts(source), vec!["name: abc"]);
    }

    #[test]
    fn trailing_backslash_at_end_of_input_is_trimmed() {
        let source = "name: If the file ends with a backslash, it will be trimmed away\\";
        assert_eq!(
            texts(source),
            vec!["name: If the file ends with a backslash, it will be trimmed away"]
        );
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        assert_eq!(texts("\u{feff}format-version: 1.2\n"), vec!["format-version: 1.2"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let source: &[u8] = b"name: caf\xe9\n";
        let lines: Vec<_> = LineReader::new(source).map(Result::unwrap).collect();
        assert_eq!(lines[0].text, "name: caf\u{fffd}");
    }

    #[test]
    fn is_continued_checks_parity() {
        assert!(is_continued("a\\"));
        assert!(!is_continued("a\\\\"));
        assert!(is_continued("a\\\\\\"));
        assert!(!is_continued("a"));
    }
}
