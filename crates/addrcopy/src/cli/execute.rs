//! Command execution logic.

use addrcopy_tsv::{LineEnding, StreamOptions};
use anyhow::{Context, Result};

use super::Cli;
use super::args::{CopyArgs, CountArgs};
use crate::commands::{copy, count};
use crate::config::Config;
use crate::output::{self, OutputMode};

/// Merge the config file (if any) with command-line overrides.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or is invalid.
pub fn resolve_options(cli: &Cli) -> Result<StreamOptions> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let mut options = config.stream_options()?;

    if let Some(line_ending) = cli.line_ending {
        options = options.with_line_ending(LineEnding::from(line_ending));
    }
    if let Some(capacity) = cli.buffer_capacity {
        options = options.with_buffer_capacity(capacity as usize);
    }

    tracing::debug!(?options, "resolved stream options");
    Ok(options)
}

/// Execute the copy command
///
/// # Errors
///
/// Returns an error if either file cannot be opened or the copy fails
/// part-way.
pub fn execute_copy(args: &CopyArgs, options: StreamOptions, output_mode: OutputMode) -> Result<()> {
    let summary = copy::copy(&args.source, &args.dest, options, args.report_skipped)
        .with_context(|| {
            format!(
                "failed to copy {} to {}",
                args.source.display(),
                args.dest.display()
            )
        })?;

    output::print_copy_summary(&summary, output_mode)?;
    Ok(())
}

/// Execute the count command
///
/// # Errors
///
/// Returns an error if the source cannot be read or the summary cannot be
/// printed.
pub fn execute_count(
    args: &CountArgs,
    options: StreamOptions,
    output_mode: OutputMode,
) -> Result<()> {
    let summary = count::count(&args.source, options, args.report_skipped)
        .with_context(|| format!("failed to count records in {}", args.source.display()))?;

    output::print_count_summary(&summary, output_mode)?;
    Ok(())
}
