//! Frame tokenizing: grouping logical lines into OBO stanzas.

use std::io::{self, Read};

use winnow::{combinator::delimited, prelude::*, token::take_while};

use crate::escape::{decode_text, split_tag_value};
use crate::reader::{LineReader, LogicalLine};
use crate::warning::{Warning, WarningCollector};

/// Frame type describing a vocabulary term.
pub const TERM_FRAME: &str = "Term";

/// One stanza of an OBO source: a `[Type]` marker and the tag/value lines
/// that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The type between the marker brackets, as written.
    pub frame_type: String,
    /// 1-based line number of the marker.
    pub line_number: usize,
    /// Decoded tag/value occurrences in file order; repeated tags repeat.
    pub tags: Vec<(String, String)>,
}

impl Frame {
    /// Creates an empty frame of the given type.
    #[must_use]
    pub fn new(frame_type: impl Into<String>, line_number: usize) -> Self {
        Self {
            frame_type: frame_type.into(),
            line_number,
            tags: Vec::new(),
        }
    }

    /// Returns `true` for `[Term]` frames, ignoring case.
    #[must_use]
    pub fn is_term(&self) -> bool {
        self.frame_type.eq_ignore_ascii_case(TERM_FRAME)
    }

    /// Iterates over every value of `tag`, in file order.
    pub fn values<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags
            .iter()
            .filter(move |(key, _)| key == tag)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first non-blank value of `tag`.
    #[must_use]
    pub fn first_non_blank(&self, tag: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(key, value)| key == tag && !value.trim().is_empty())
            .map(|(_, value)| value.as_str())
    }
}

/// Recognizes a frame marker such as `[Term]` and returns its type.
///
/// Surrounding whitespace is ignored; the type must be one or more ASCII
/// letters.
#[must_use]
pub fn parse_frame_marker(line: &str) -> Option<&str> {
    frame_marker.parse(line.trim()).ok()
}

fn frame_marker<'s>(input: &mut &'s str) -> PResult<&'s str> {
    delimited('[', take_while(1.., |c: char| c.is_ascii_alphabetic()), ']').parse_next(input)
}

/// Iterator turning an OBO source into [`Frame`]s.
///
/// Lines before the first frame marker form the header; their tags are
/// available from [`header`](Self::header) and never produce a frame. The
/// frame open at end of input is yielded as if another marker followed it.
///
/// Lines without a tag/value separator are skipped and recorded as
/// [`Warning::MalformedLine`].
///
/// # Examples
///
/// ```
/// use vocab_obo::frame::FrameTokenizer;
///
/// let source = "format-version: 1.2\n[Term]\nid: A\n[Typedef]\nid: part_of\n";
/// let mut frames = FrameTokenizer::new(source.as_bytes());
/// let term = frames.next().unwrap().unwrap();
/// assert!(term.is_term());
/// let typedef = frames.next().unwrap().unwrap();
/// assert!(!typedef.is_term());
/// assert!(frames.next().is_none());
/// assert_eq!(frames.header()[0].0, "format-version");
/// ```
pub struct FrameTokenizer<R> {
    lines: LineReader<R>,
    current: Option<Frame>,
    header: Vec<(String, String)>,
    warnings: WarningCollector,
}

impl<R: Read> FrameTokenizer<R> {
    /// Creates a tokenizer over `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
            current: None,
            header: Vec::new(),
            warnings: WarningCollector::new(),
        }
    }

    /// Decoded tag/value pairs found before the first frame marker.
    #[must_use]
    pub fn header(&self) -> &[(String, String)] {
        &self.header
    }

    /// The warnings recorded and not yet taken.
    #[must_use]
    pub fn warnings(&self) -> &WarningCollector {
        &self.warnings
    }

    /// Takes the warnings recorded so far, leaving the tokenizer's empty.
    pub fn take_warnings(&mut self) -> WarningCollector {
        std::mem::take(&mut self.warnings)
    }

    /// Reads the next complete frame, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    pub fn read_frame(&mut self) -> io::Result<Option<Frame>> {
        while let Some(line) = self.lines.read_logical()? {
            if let Some(frame_type) = parse_frame_marker(&line.text) {
                let next = Frame::new(frame_type, line.line_number);
                if let Some(finished) = self.current.replace(next) {
                    return Ok(Some(finished));
                }
                continue;
            }
            self.load_field(&line);
        }
        Ok(self.current.take())
    }

    fn load_field(&mut self, line: &LogicalLine) {
        let Some((raw_tag, raw_value)) = split_tag_value(&line.text) else {
            tracing::debug!(line = line.line_number, "skipping line without separator");
            self.warnings.add(Warning::MalformedLine {
                line_number: line.line_number,
                content: line.text.clone(),
            });
            return;
        };

        let field = (decode_text(raw_tag), decode_text(raw_value));
        tracing::trace!(line = line.line_number, tag = %field.0, "field");
        match self.current.as_mut() {
            Some(frame) => frame.tags.push(field),
            None => self.header.push(field),
        }
    }
}

impl<R: Read> Iterator for FrameTokenizer<R> {
    type Item = io::Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_frame().transpose()
    }
}
