//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for vocab using clap's derive API.
//!
//! # Commands
//!
//! - `parse`: Parse a vocabulary source and write its terms as JSON Lines
//! - `stats`: Summarize the terms of a vocabulary source
//! - `formats`: List supported source formats or check one
//!
//! # Global Flags
//!
//! - `--json`: Output summaries in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! vocab parse hp.obo --identifier HP --output hp.jsonl
//! vocab stats hp.obo --json
//! vocab formats obo
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{DEFAULT_FORMAT, FormatsArgs, ParseArgs, StatsArgs};
pub use validators::validate_format;

use crate::output::OutputMode;

/// Vocab - import vocabulary sources
///
/// Parses vocabulary files in the OBO flat-file format and emits one JSON
/// record per term, with its parents and transitive ancestors resolved.
#[derive(Parser, Debug)]
#[command(name = "vocab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output summaries in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Parse a vocabulary source into JSON Lines
    ///
    /// Every term becomes one line holding its id, label, description,
    /// parents, ancestors and all of its properties. A summary is printed to
    /// stderr.
    Parse(ParseArgs),

    /// Show statistics about a vocabulary source
    Stats(StatsArgs),

    /// List supported source formats, or check a single one
    Formats(FormatsArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn execute(&self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Commands::Parse(args) => execute::execute_parse(args, output_mode),
            Commands::Stats(args) => execute::execute_stats(args, output_mode),
            Commands::Formats(args) => execute::execute_formats(args, output_mode),
        }
    }
}
