//! Error types for vocab CLI operations.

use thiserror::Error;

/// The error type for vocab CLI operations.
///
/// Parse and I/O failures travel as `anyhow` errors from the commands; this
/// type covers what the CLI itself decides is wrong.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for vocab operations.
pub type Result<T> = std::result::Result<T, Error>;
