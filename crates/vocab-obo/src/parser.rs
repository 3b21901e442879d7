//! OBO source parsing: frames in, finished terms out.
//!
//! One call to [`OboParser::parse`] reads a source once from start to end:
//! the [`FrameTokenizer`] yields frames, `[Term]` frames are folded into a
//! [`TermTable`] by identifier, and once the source is exhausted every term
//! gets its ancestor closure and is handed to the sink in order of first
//! appearance. All state of a parse lives in a private context value, so a
//! single [`OboParser`] can serve any number of concurrent parses.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ancestors::{AncestorResolver, Resolution};
use crate::description::VocabularyDescription;
use crate::error::{Error, Result};
use crate::frame::{Frame, FrameTokenizer};
use crate::merge::{MergeOutcome, TermTable};
use crate::sink::TermSink;
use crate::warning::{Warning, WarningCollector};

/// Format label handled by [`OboParser`].
pub const OBO_FORMAT: &str = "OBO";

/// A parser for one vocabulary source format.
pub trait SourceParser: Send + Sync {
    /// The format label this parser handles, upper case.
    fn format(&self) -> &'static str;

    /// Returns `true` if this parser handles `format`, ignoring case.
    fn can_parse(&self, format: Option<&str>) -> bool {
        format.is_some_and(|format| format.eq_ignore_ascii_case(self.format()))
    }

    /// Parses the source at `source`, handing every term to `sink`.
    ///
    /// A source that does not exist is not an error: nothing is emitted and
    /// an empty report is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if an existing source cannot be read.
    fn parse(
        &self,
        source: &Path,
        description: &VocabularyDescription,
        sink: &mut dyn TermSink,
    ) -> Result<ParseReport>;
}

static PARSERS: &[&dyn SourceParser] = &[&OboParser];

/// Finds the parser handling `format`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if no parser handles it.
pub fn parser_for(format: &str) -> Result<&'static dyn SourceParser> {
    PARSERS
        .iter()
        .copied()
        .find(|parser| parser.can_parse(Some(format)))
        .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))
}

/// Format labels of every available parser.
pub fn supported_formats() -> impl Iterator<Item = &'static str> {
    PARSERS.iter().map(|parser| parser.format())
}

/// Summary of one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Terms handed to the sink.
    pub terms: usize,
    /// Frames read, of any type.
    pub frames: usize,
    /// Frames skipped because they were not `[Term]` frames.
    pub skipped_frames: usize,
    /// `[Term]` frames discarded for lack of an `id`.
    pub frames_without_id: usize,
    /// `[Term]` frames merged into an identifier seen earlier.
    pub merged_frames: usize,
    /// Tag/value pairs of the header, before the first frame.
    pub header: Vec<(String, String)>,
    /// Non-fatal problems, in the order they were found.
    pub warnings: Vec<Warning>,
}

impl ParseReport {
    /// Returns the first header value of `tag`, such as `format-version`.
    #[must_use]
    pub fn header_value(&self, tag: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|(key, _)| key == tag)
            .map(|(_, value)| value.as_str())
    }
}

/// Parser for vocabulary sources in the OBO flat-file format.
#[derive(Debug, Clone, Copy, Default)]
pub struct OboParser;

impl OboParser {
    /// Creates a parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses OBO text from any reader, handing every term to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails. Terms are only emitted once
    /// the whole source has been read, so a failed parse emits nothing.
    pub fn parse_reader<R: Read>(&self, reader: R, sink: &mut dyn TermSink) -> Result<ParseReport> {
        let mut frames = FrameTokenizer::new(reader);
        let mut context = ParseContext::new();

        while let Some(frame) = frames.read_frame()? {
            context.warnings.append(&mut frames.take_warnings());
            context.accept(&frame);
        }
        context.warnings.append(&mut frames.take_warnings());
        context.report.header = frames.header().to_vec();

        Ok(context.emit(sink))
    }
}

impl SourceParser for OboParser {
    fn format(&self) -> &'static str {
        OBO_FORMAT
    }

    fn parse(
        &self,
        source: &Path,
        description: &VocabularyDescription,
        sink: &mut dyn TermSink,
    ) -> Result<ParseReport> {
        let vocabulary = description.identifier.as_deref().unwrap_or_default();
        let file = match File::open(source) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %source.display(), vocabulary, "source not found, nothing to import");
                return Ok(ParseReport::default());
            }
            Err(e) => return Err(read_error(source, e)),
        };

        info!(path = %source.display(), vocabulary, "parsing OBO source");
        let report = self.parse_reader(file, sink).map_err(|e| match e {
            Error::Io(e) => read_error(source, e),
            other => other,
        })?;
        info!(
            terms = report.terms,
            frames = report.frames,
            warnings = report.warnings.len(),
            "finished parsing OBO source"
        );
        Ok(report)
    }
}

fn read_error(path: &Path, source: io::Error) -> Error {
    Error::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Parses OBO text from `reader` with a default [`OboParser`].
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails.
///
/// # Examples
///
/// ```
/// use vocab_obo::{VocabularyTermSource, parse_reader};
///
/// let source = "[Term]\nid: A\nname: Alpha\n\n[Term]\nid: B\nis_a: A\nname: Beta\n";
/// let mut terms: Vec<VocabularyTermSource> = Vec::new();
/// let report = parse_reader(source.as_bytes(), &mut terms)?;
///
/// assert_eq!(report.terms, 2);
/// assert_eq!(terms[1].ancestors(), ["A"]);
/// # Ok::<(), vocab_obo::Error>(())
/// ```
pub fn parse_reader<R: Read>(reader: R, sink: &mut dyn TermSink) -> Result<ParseReport> {
    OboParser.parse_reader(reader, sink)
}

/// Parses the OBO file at `path` with a default [`OboParser`].
///
/// # Errors
///
/// Returns [`Error::Read`] if an existing file cannot be read.
pub fn parse_file(
    path: &Path,
    description: &VocabularyDescription,
    sink: &mut dyn TermSink,
) -> Result<ParseReport> {
    OboParser.parse(path, description, sink)
}

/// Per-parse state: the accumulator table and the running report.
struct ParseContext {
    table: TermTable,
    warnings: WarningCollector,
    report: ParseReport,
}

impl ParseContext {
    fn new() -> Self {
        Self {
            table: TermTable::new(),
            warnings: WarningCollector::new(),
            report: ParseReport::default(),
        }
    }

    fn accept(&mut self, frame: &Frame) {
        self.report.frames += 1;
        if !frame.is_term() {
            debug!(
                line = frame.line_number,
                frame_type = %frame.frame_type,
                "skipping non-term frame"
            );
            self.report.skipped_frames += 1;
            return;
        }

        match self.table.merge(frame) {
            MergeOutcome::Created => {}
            MergeOutcome::Merged => self.report.merged_frames += 1,
            MergeOutcome::MissingId => {
                warn!(line = frame.line_number, "discarding term frame without an id");
                self.report.frames_without_id += 1;
                self.warnings.add(Warning::MissingId {
                    line_number: frame.line_number,
                });
            }
        }
    }

    fn emit(self, sink: &mut dyn TermSink) -> ParseReport {
        let Self {
            table,
            mut warnings,
            mut report,
        } = self;

        let resolutions: Vec<Resolution> = {
            let resolver = AncestorResolver::new(&table);
            table.iter().map(|term| resolver.resolve(term.id())).collect()
        };

        for (term, resolution) in table.into_terms().into_iter().zip(resolutions) {
            for parent_id in resolution.unknown_parents {
                debug!(term = term.id(), parent = %parent_id, "parent is not defined");
                warnings.add(Warning::UnknownParent {
                    term_id: term.id().to_string(),
                    parent_id,
                });
            }
            if resolution.cyclic {
                warn!(term = term.id(), "is_a chain leads back to the term itself");
                warnings.add(Warning::CyclicAncestry {
                    term_id: term.id().to_string(),
                });
            }
            sink.accept(term.finish(resolution.ancestors));
            report.terms += 1;
        }

        report.warnings = warnings.into_warnings();
        report
    }
}
