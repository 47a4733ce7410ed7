//! Copy records from a source file to a destination file.

use std::path::{Path, PathBuf};

use addrcopy_tsv::{Mode, RecordStream, StreamOptions, WarningCollector};
use serde::Serialize;

use crate::error::{Error, Result};

/// Result of the copy command
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CopySummary {
    /// File records were read from
    pub source: PathBuf,
    /// File records were written to
    pub destination: PathBuf,
    /// Lines consumed from the source
    pub lines_read: usize,
    /// Records written to the destination
    pub records_copied: usize,
    /// Source lines dropped for having fewer than two fields
    pub lines_skipped: usize,
    /// Descriptions of skipped lines, when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Copy every record of `source` into `destination` as two-field lines.
///
/// The destination is created or truncated. Both files are released on every
/// exit path, including errors part-way through.
///
/// # Errors
///
/// Returns [`Error::SameFile`] if both paths name the same file, and any
/// stream error raised while copying.
pub fn copy(
    source: &Path,
    destination: &Path,
    options: StreamOptions,
    report_skipped: bool,
) -> Result<CopySummary> {
    ensure_distinct(source, destination)?;

    let warnings = WarningCollector::new();
    let mut reader = RecordStream::with_options(options);
    if report_skipped {
        reader = reader.with_warnings(warnings.clone());
    }
    let mut writer = RecordStream::with_options(options);

    reader.open(source, Mode::Read)?;
    writer.open(destination, Mode::Write)?;

    let mut records_copied = 0;
    while let Some(record) = reader.read()? {
        writer.write([record.first(), record.second()])?;
        records_copied += 1;
    }

    let stats = reader.read_stats().unwrap_or_default();
    reader.close()?;
    writer.close()?;

    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        records = records_copied,
        skipped = stats.lines_skipped,
        "copy complete"
    );

    Ok(CopySummary {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        lines_read: stats.lines_read,
        records_copied,
        lines_skipped: stats.lines_skipped,
        warnings: warnings
            .into_warnings()
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

/// Refuse to truncate the file being read.
fn ensure_distinct(source: &Path, destination: &Path) -> Result<()> {
    // A destination that does not exist yet cannot be the source.
    let Ok(dest) = destination.canonicalize() else {
        return Ok(());
    };
    if source.canonicalize().is_ok_and(|src| src == dest) {
        return Err(Error::SameFile(dest.display().to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn copies_records_and_reports_counts() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("in.tsv");
        let dest = dir.path().join("out.tsv");
        fs::write(&source, "Ann\tOak St.\n\nBo\tElm St.\tExtra\n").unwrap();

        let summary = copy(&source, &dest, StreamOptions::default(), false).unwrap();

        assert_eq!(summary.records_copied, 2);
        assert_eq!(summary.lines_read, 3);
        assert_eq!(summary.lines_skipped, 1);
        assert!(summary.warnings.is_empty());
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "Ann\tOak St.\nBo\tElm St.\n"
        );
    }

    #[test]
    fn reports_skipped_lines_when_asked() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("in.tsv");
        let dest = dir.path().join("out.tsv");
        fs::write(&source, "only-one-field\nAnn\tOak St.\n").unwrap();

        let summary = copy(&source, &dest, StreamOptions::default(), true).unwrap();

        assert_eq!(summary.warnings, vec!["line 1: skipped: 1 field(s), need 2"]);
    }

    #[test]
    fn missing_source_leaves_destination_untouched() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("missing.tsv");
        let dest = dir.path().join("out.tsv");

        let err = copy(&source, &dest, StreamOptions::default(), false).unwrap_err();

        assert!(matches!(
            err,
            Error::Stream(addrcopy_tsv::Error::Open { .. })
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn refuses_to_copy_onto_source() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("in.tsv");
        fs::write(&source, "Ann\tOak St.\n").unwrap();
        let alias = dir.path().join(".").join("in.tsv");

        let err = copy(&source, &alias, StreamOptions::default(), false).unwrap_err();

        assert!(matches!(err, Error::SameFile(_)));
        assert_eq!(fs::read_to_string(&source).unwrap(), "Ann\tOak St.\n");
    }
}
