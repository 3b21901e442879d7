//! Parser for vocabulary sources in the OBO flat-file format.
//!
//! An OBO source is a sequence of frames such as `[Term]` or `[Typedef]`,
//! each followed by `tag: value` lines. This crate reads such a source once,
//! merges every `[Term]` frame sharing an identifier, resolves each term's
//! transitive `is_a` ancestors and hands one [`VocabularyTermSource`] per
//! identifier to a [`TermSink`].
//!
//! Parsing is resilient: lines without a separator, frames without an `id`
//! and parents that are never defined are reported as [`Warning`]s in the
//! returned [`ParseReport`] and never abort the import.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use vocab_obo::{VocabularyDescription, VocabularyTermSource, parser_for};
//!
//! let parser = parser_for("obo")?;
//! let description = VocabularyDescription::builder().identifier("test").build();
//!
//! let mut terms: Vec<VocabularyTermSource> = Vec::new();
//! let report = parser.parse(Path::new("does-not-exist.obo"), &description, &mut terms)?;
//!
//! assert!(terms.is_empty());
//! assert_eq!(report.terms, 0);
//! # Ok::<(), vocab_obo::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ancestors;
pub mod description;
pub mod error;
pub mod escape;
pub mod frame;
pub mod merge;
pub mod parser;
pub mod reader;
pub mod sink;
pub mod term;
pub mod warning;
pub mod writer;

pub use description::{VocabularyDescription, VocabularyDescriptionBuilder};
pub use error::{Error, Result};
pub use parser::{
    OBO_FORMAT, OboParser, ParseReport, SourceParser, parse_file, parse_reader, parser_for,
    supported_formats,
};
pub use sink::TermSink;
pub use term::{PropertyMap, VocabularyTermSource};
pub use warning::{Warning, WarningCollector};
pub use writer::TermWriter;
