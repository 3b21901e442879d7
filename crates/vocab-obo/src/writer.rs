//! JSONL output for parsed terms.
//!
//! [`TermWriter`] is a [`TermSink`] that serializes every term it receives to
//! one JSON line. A sink cannot fail, so the first write error is kept and
//! returned by [`finish`](TermWriter::finish); terms accepted after it are
//! dropped.

use std::io::{self, BufWriter, Write};

use crate::error::Result;
use crate::sink::TermSink;
use crate::term::VocabularyTermSource;

/// Buffered JSON Lines writer for [`VocabularyTermSource`]s.
///
/// # Examples
///
/// ```
/// use vocab_obo::{TermWriter, parse_reader};
///
/// let mut writer = TermWriter::new(Vec::new());
/// parse_reader("[Term]\nid: A\nname: Alpha\n".as_bytes(), &mut writer)?;
///
/// assert_eq!(writer.written(), 1);
/// let output = String::from_utf8(writer.finish()?).unwrap();
/// assert!(output.starts_with(r#"{"id":"A","label":"Alpha""#));
/// # Ok::<(), vocab_obo::Error>(())
/// ```
pub struct TermWriter<W: Write> {
    writer: BufWriter<W>,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> TermWriter<W> {
    /// Creates a new `TermWriter` wrapping the given writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
            error: None,
        }
    }

    /// Creates a new `TermWriter` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, writer),
            written: 0,
            error: None,
        }
    }

    /// Serializes one term as a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    pub fn write(&mut self, term: &VocabularyTermSource) -> Result<()> {
        self.write_line(term)?;
        self.written += 1;
        Ok(())
    }

    fn write_line(&mut self, term: &VocabularyTermSource) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, term)?;
        self.writer.write_all(b"\n")
    }

    /// Number of terms written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes the buffer and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while accepting terms, or the flush error.
    pub fn finish(self) -> Result<W> {
        if let Some(e) = self.error {
            return Err(e.into());
        }
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> TermSink for TermWriter<W> {
    fn accept(&mut self, term: VocabularyTermSource) {
        if self.error.is_some() {
            return;
        }
        match self.write_line(&term) {
            Ok(()) => self.written += 1,
            Err(e) => {
                tracing::error!(term = term.id(), error = %e, "failed to write term");
                self.error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_reader;
    use crate::Error;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn writes_one_line_per_term() {
        let mut writer = TermWriter::new(Vec::new());
        parse_reader("[Term]\nid: A\n[Term]\nid: B\nis_a: A\n".as_bytes(), &mut writer).unwrap();

        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["id"], "A");
        assert_eq!(lines[1]["ancestors"], serde_json::json!(["A"]));
    }

    #[test]
    fn write_error_surfaces_on_finish() {
        let mut writer = TermWriter::with_capacity(FailingWriter, 0);
        parse_reader("[Term]\nid: A\n[Term]\nid: B\n".as_bytes(), &mut writer).unwrap();

        assert_eq!(writer.written(), 0);
        assert!(matches!(writer.finish(), Err(Error::Io(_))));
    }

    #[test]
    fn empty_output_finishes_cleanly() {
        let writer = TermWriter::new(Vec::new());
        assert!(writer.finish().unwrap().is_empty());
    }
}
