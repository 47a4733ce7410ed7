//! Addrcopy CLI binary.

use addrcopy::cli::Cli;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=addrcopy=debug,addrcopy_tsv=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("addrcopy=info,addrcopy_tsv=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting addrcopy CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Addrcopy CLI completed successfully");
    Ok(())
}
