//! Output formatting for CLI commands.
//!
//! Summaries are printed either as human-readable text or as pretty JSON for
//! programmatic use.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::commands::copy::CopySummary;
use crate::commands::count::CountSummary;

/// Output format selected by the global `--json` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputMode {
    /// Pick the mode from the `--json` flag.
    #[must_use]
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Print the result of a copy.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_copy_summary(summary: &CopySummary, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match mode {
        OutputMode::Text => write_copy_text(&mut handle, summary),
        OutputMode::Json => write_json(&mut handle, summary),
    }
}

/// Print the result of a count.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_count_summary(summary: &CountSummary, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match mode {
        OutputMode::Text => write_count_text(&mut handle, summary),
        OutputMode::Json => write_json(&mut handle, summary),
    }
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::other(format!("JSON serialization failed: {e}")))?;
    writeln!(w, "{json}")
}

fn write_copy_text<W: Write>(w: &mut W, summary: &CopySummary) -> io::Result<()> {
    writeln!(
        w,
        "{} {} record(s) from {} to {}",
        "Copied".green().bold(),
        summary.records_copied,
        summary.source.display(),
        summary.destination.display()
    )?;
    write_skipped(w, summary.lines_skipped, &summary.warnings)
}

fn write_count_text<W: Write>(w: &mut W, summary: &CountSummary) -> io::Result<()> {
    writeln!(
        w,
        "{}: {} record(s) in {} line(s)",
        summary.source.display().to_string().cyan(),
        summary.records,
        summary.lines_read
    )?;
    write_skipped(w, summary.lines_skipped, &summary.warnings)
}

fn write_skipped<W: Write>(w: &mut W, skipped: usize, warnings: &[String]) -> io::Result<()> {
    if skipped > 0 {
        writeln!(w, "  {} {skipped} line(s)", "Skipped".yellow())?;
    }
    for warning in warnings {
        writeln!(w, "    {}", warning.dimmed())?;
    }
    Ok(())
}
