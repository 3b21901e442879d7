//! Vocab CLI binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vocab::cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so that JSONL on stdout stays clean.
    // Example: RUST_LOG=vocab=debug,vocab_obo=trace vocab parse hp.obo
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vocab=info,vocab_obo=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting vocab CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Vocab CLI completed successfully");
    Ok(())
}
