//! Count the records a file yields.

use std::path::{Path, PathBuf};

use addrcopy_tsv::{Mode, RecordStream, StreamOptions, WarningCollector};
use serde::Serialize;

use crate::error::Result;

/// Result of the count command
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountSummary {
    /// File that was read
    pub source: PathBuf,
    /// Lines consumed
    pub lines_read: usize,
    /// Lines that formed a record
    pub records: usize,
    /// Lines dropped for having fewer than two fields
    pub lines_skipped: usize,
    /// Descriptions of skipped lines, when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Read `source` to the end and report how many records it holds.
///
/// # Errors
///
/// Returns an error if `source` cannot be opened or read.
pub fn count(source: &Path, options: StreamOptions, report_skipped: bool) -> Result<CountSummary> {
    let warnings = WarningCollector::new();
    let mut stream = RecordStream::with_options(options);
    if report_skipped {
        stream = stream.with_warnings(warnings.clone());
    }
    stream.open(source, Mode::Read)?;

    while stream.read()?.is_some() {}

    let stats = stream.read_stats().unwrap_or_default();
    stream.close()?;

    Ok(CountSummary {
        source: source.to_path_buf(),
        lines_read: stats.lines_read,
        records: stats.records_read,
        lines_skipped: stats.lines_skipped,
        warnings: warnings
            .into_warnings()
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn counts_records_and_skips() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("in.tsv");
        fs::write(&source, "a\tb\n\nsolo\nc\td\te\n").unwrap();

        let summary = count(&source, StreamOptions::default(), true).unwrap();

        assert_eq!(summary.records, 2);
        assert_eq!(summary.lines_read, 4);
        assert_eq!(summary.lines_skipped, 2);
        assert_eq!(summary.warnings.len(), 2);
    }

    #[test]
    fn empty_file_counts_zero() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("empty.tsv");
        fs::write(&source, "").unwrap();

        let summary = count(&source, StreamOptions::default(), false).unwrap();
        assert_eq!(summary.records, 0);
        assert_eq!(summary.lines_read, 0);
    }
}
