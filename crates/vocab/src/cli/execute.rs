//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use vocab_obo::{
    TermWriter, VocabularyDescription, VocabularyTermSource, parser_for, supported_formats,
};

use super::args::{FormatsArgs, ParseArgs, StatsArgs};
use crate::config::{self, DescriptionOverrides};
use crate::output::{self, OutputMode};
use crate::stats::TermStats;

/// Execute the parse command
pub fn execute_parse(args: &ParseArgs, output_mode: OutputMode) -> Result<()> {
    let parser = parser_for(&args.format)?;
    let overrides = DescriptionOverrides {
        identifier: args.identifier.clone(),
        name: args.name.clone(),
        version: args.vocabulary_version.clone(),
    };
    let description = config::resolve(
        args.description.as_deref(),
        &overrides,
        &args.file,
        &args.format,
    )?;

    let (report, destination) = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = TermWriter::new(file);
            let report = parser.parse(&args.file, &description, &mut writer)?;
            writer
                .finish()
                .with_context(|| format!("Failed to write {}", path.display()))?;
            (report, path.display().to_string())
        }
        None => {
            let stdout = io::stdout();
            let mut writer = TermWriter::new(stdout.lock());
            let report = parser.parse(&args.file, &description, &mut writer)?;
            let mut stdout = writer.finish().context("Failed to write to stdout")?;
            stdout.flush()?;
            (report, "stdout".to_string())
        }
    };

    tracing::info!(
        vocabulary = description.identifier.as_deref().unwrap_or_default(),
        terms = report.terms,
        "import complete"
    );

    if args.quiet {
        return Ok(());
    }
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    match output_mode {
        OutputMode::Json => output::write_json(&mut handle, &report)?,
        OutputMode::Text => output::write_parse_summary(&mut handle, &report, &destination)?,
    }
    Ok(())
}

/// Execute the stats command
pub fn execute_stats(args: &StatsArgs, output_mode: OutputMode) -> Result<()> {
    let parser = parser_for(&args.format)?;
    let description = VocabularyDescription::builder()
        .source(args.file.display().to_string())
        .source_format(parser.format())
        .build();

    let mut stats = TermStats::default();
    let mut sink = |term: VocabularyTermSource| stats.record(&term);
    let report = parser.parse(&args.file, &description, &mut sink)?;
    stats.complete(&report);

    match output_mode {
        OutputMode::Json => output::print_json(&stats)?,
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            output::write_stats_text(&mut handle, &stats)?;
            handle.flush()?;
        }
    }
    Ok(())
}

/// Execute the formats command
///
/// With a label, reports whether it is supported and fails if not. Without
/// one, lists every supported format.
pub fn execute_formats(args: &FormatsArgs, output_mode: OutputMode) -> Result<()> {
    let Some(label) = &args.label else {
        let formats: Vec<&str> = supported_formats().collect();
        match output_mode {
            OutputMode::Json => output::print_json(&serde_json::json!({ "formats": formats }))?,
            OutputMode::Text => {
                for format in formats {
                    println!("{format}");
                }
            }
        }
        return Ok(());
    };

    let supported = parser_for(label).is_ok();
    match output_mode {
        OutputMode::Json => output::print_json(&serde_json::json!({
            "format": label,
            "supported": supported
        }))?,
        OutputMode::Text if supported => println!("{label}: supported"),
        OutputMode::Text => println!("{label}: not supported"),
    }

    if !supported {
        anyhow::bail!("Unsupported vocabulary format: {label}");
    }
    Ok(())
}
