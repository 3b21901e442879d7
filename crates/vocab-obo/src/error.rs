//! Error types for vocab-obo operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for vocab-obo operations.
///
/// Only infrastructure failures are errors. Malformed lines, frames without an
/// identifier and similar content problems are reported as
/// [`Warning`](crate::warning::Warning)s and never abort a parse.
#[derive(Debug, Error)]
pub enum Error {
    /// An existing source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the source being read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// IO error occurred while reading from a non-file source.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No parser is registered for the requested source format.
    #[error("Unsupported vocabulary format: {0}")]
    UnsupportedFormat(String),
}

/// A specialized Result type for vocab-obo operations.
pub type Result<T> = std::result::Result<T, Error>;
