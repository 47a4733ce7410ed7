//! CLI argument structs for all commands.

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the `copy` command
#[derive(Parser, Debug, Clone)]
pub struct CopyArgs {
    /// File to read records from
    pub source: PathBuf,

    /// File to write records to (created or truncated)
    pub dest: PathBuf,

    /// List every skipped source line in the summary
    #[arg(long)]
    pub report_skipped: bool,
}

/// Arguments for the `count` command
#[derive(Parser, Debug, Clone)]
pub struct CountArgs {
    /// File to read records from
    pub source: PathBuf,

    /// List every skipped line in the summary
    #[arg(long)]
    pub report_skipped: bool,
}
