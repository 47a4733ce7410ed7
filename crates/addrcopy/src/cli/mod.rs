//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `copy`: Copy every record from a source file to a destination file
//! - `count`: Count the records a file yields
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format
//! - `--config`: YAML file with stream settings
//! - `--line-ending`, `--buffer-capacity`: override the config file
//!
//! # Example
//!
//! ```bash
//! addrcopy copy contacts.tsv contacts-out.tsv
//! addrcopy --json count contacts.tsv --report-skipped
//! ```

mod args;
mod execute;
mod types;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{CopyArgs, CountArgs};
pub use types::LineEndingArg;

use crate::output::OutputMode;

/// Addrcopy - stream two-column tab-delimited address files
///
/// Lines with fewer than two tab-separated fields are skipped; fields past
/// the second are dropped.
#[derive(Parser, Debug)]
#[command(name = "addrcopy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Line terminator for written files (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub line_ending: Option<LineEndingArg>,

    /// Read/write buffer size in bytes (overrides the config file)
    #[arg(long, global = true, value_name = "BYTES", value_parser = clap::value_parser!(u32).range(1..))]
    pub buffer_capacity: Option<u32>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Copy records from SOURCE to DEST
    ///
    /// DEST is created or truncated. Each record is written back as exactly
    /// two tab-separated fields.
    Copy(CopyArgs),

    /// Count the records in SOURCE
    Count(CountArgs),
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Execute the parsed command
    ///
    /// # Errors
    ///
    /// Returns an error if option resolution or the selected command fails.
    pub fn execute(&self) -> Result<()> {
        let options = execute::resolve_options(self)?;
        let output_mode = OutputMode::from_json_flag(self.json);

        match &self.command {
            Commands::Copy(args) => execute::execute_copy(args, options, output_mode),
            Commands::Count(args) => execute::execute_count(args, options, output_mode),
        }
    }
}
