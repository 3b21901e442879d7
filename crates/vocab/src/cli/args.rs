//! CLI argument structs for all commands.

use std::path::PathBuf;

use clap::Parser;

use super::validators::validate_format;

/// Default source format
pub const DEFAULT_FORMAT: &str = "obo";

/// Arguments for the `parse` command
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Vocabulary source file
    pub file: PathBuf,

    /// Source format
    #[arg(short, long, default_value = DEFAULT_FORMAT, value_parser = validate_format)]
    pub format: String,

    /// YAML file describing the vocabulary
    ///
    /// Holds identifier, name, description, version, source, source-format,
    /// website and citation.
    #[arg(short, long)]
    pub description: Option<PathBuf>,

    /// Vocabulary identifier (overrides the description file)
    #[arg(long)]
    pub identifier: Option<String>,

    /// Vocabulary name (overrides the description file)
    #[arg(long)]
    pub name: Option<String>,

    /// Vocabulary version (overrides the description file)
    #[arg(long = "vocabulary-version", value_name = "VERSION")]
    pub vocabulary_version: Option<String>,

    /// Write terms to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Vocabulary source file
    pub file: PathBuf,

    /// Source format
    #[arg(short, long, default_value = DEFAULT_FORMAT, value_parser = validate_format)]
    pub format: String,
}

/// Arguments for the `formats` command
#[derive(Parser, Debug, Clone)]
pub struct FormatsArgs {
    /// Format label to check, e.g. `OBO`
    pub label: Option<String>,
}
