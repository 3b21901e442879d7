//! Output formatting for CLI commands.
//!
//! Commands print either human-readable text or JSON for programmatic use.
//! Term data itself always goes out as JSON Lines; this module only renders
//! summaries around it.

use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use vocab_obo::{ParseReport, Warning};

use crate::stats::TermStats;

/// Maximum number of warnings listed in a text summary.
const MAX_LISTED_WARNINGS: usize = 10;

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

/// Write a pretty JSON document followed by a newline
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

/// Write the summary of a `parse` run
pub fn write_parse_summary<W: Write>(
    w: &mut W,
    report: &ParseReport,
    destination: &str,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {} term(s) to {}",
        "Wrote".green().bold(),
        report.terms,
        destination
    )?;
    writeln!(
        w,
        "  {} {} read, {} skipped, {} merged, {} without id",
        "Frames:".dimmed(),
        report.frames,
        report.skipped_frames,
        report.merged_frames,
        report.frames_without_id
    )?;
    if let Some(version) = report.header_value("format-version") {
        writeln!(w, "  {} {}", "Format version:".dimmed(), version)?;
    }
    write_warnings(w, &report.warnings)
}

/// Write a warning count followed by the first few warnings
pub fn write_warnings<W: Write>(w: &mut W, warnings: &[Warning]) -> io::Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }

    writeln!(w, "{} {}", "Warnings:".yellow().bold(), warnings.len())?;
    for warning in warnings.iter().take(MAX_LISTED_WARNINGS) {
        writeln!(w, "  {} {}", format!("[{}]", warning.kind()).yellow(), warning)?;
    }
    if warnings.len() > MAX_LISTED_WARNINGS {
        writeln!(
            w,
            "  {}",
            format!("... and {} more", warnings.len() - MAX_LISTED_WARNINGS).dimmed()
        )?;
    }
    Ok(())
}

/// Write statistics as text
pub fn write_stats_text<W: Write>(w: &mut W, stats: &TermStats) -> io::Result<()> {
    writeln!(w, "Vocabulary Statistics")?;
    writeln!(w, "=====================")?;
    writeln!(w)?;
    writeln!(w, "Terms:           {}", stats.terms)?;
    writeln!(w, "  Roots:         {}", stats.roots)?;
    writeln!(w, "  With def:      {}", stats.with_definition)?;
    match &stats.deepest_term {
        Some(id) => writeln!(
            w,
            "Max ancestors:   {} ({})",
            stats.max_ancestors,
            id.cyan()
        )?,
        None => writeln!(w, "Max ancestors:   {}", stats.max_ancestors)?,
    }
    writeln!(w)?;
    writeln!(w, "Frames:          {}", stats.frames)?;
    writeln!(w, "  Not terms:     {}", stats.skipped_frames)?;
    writeln!(w)?;
    writeln!(w, "Unknown parents: {}", count(stats.unknown_parents))?;
    writeln!(w, "Cyclic terms:    {}", count(stats.cyclic_terms))?;
    writeln!(w, "Warnings:        {}", count(stats.warnings))?;
    Ok(())
}

/// Highlight non-zero problem counts.
fn count(n: usize) -> String {
    if n == 0 {
        n.to_string()
    } else {
        n.to_string().yellow().to_string()
    }
}
