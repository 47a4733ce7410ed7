//! Record reading operations.
//!
//! This module turns a buffered byte stream into two-field records. Lines
//! that split into fewer than two tab-separated fields are skipped, so the
//! caller only ever sees a record or the end of the stream.

use std::io::{self, BufRead};

use crate::record::{Record, field_count};
use crate::warning::{Warning, WarningCollector};
use crate::Result;

/// Counters maintained by a [`RecordReader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Lines consumed from the underlying stream, skipped or not.
    pub lines_read: usize,
    /// Records returned to the caller.
    pub records_read: usize,
    /// Lines dropped for having fewer than two fields.
    pub lines_skipped: usize,
}

/// Reader for two-field tab-delimited records.
///
/// `RecordReader` wraps any [`BufRead`] and tracks line numbers so skipped
/// lines can be reported. Input is expected to be UTF-8 without a
/// byte-order mark; see [`crate::encoding`] for turning arbitrary files
/// into such a stream. Invalid UTF-8 is replaced, not rejected.
///
/// # Examples
///
/// ```
/// use addrcopy_tsv::RecordReader;
/// use std::io::Cursor;
///
/// let data = "Ann\tOak St.\n\nBo\tElm St.\tExtra\n";
/// let mut reader = RecordReader::new(Cursor::new(data));
///
/// let ann = reader.read_record().unwrap().unwrap();
/// assert_eq!((ann.first(), ann.second()), ("Ann", "Oak St."));
///
/// let bo = reader.read_record().unwrap().unwrap();
/// assert_eq!((bo.first(), bo.second()), ("Bo", "Elm St."));
///
/// assert!(reader.read_record().unwrap().is_none());
/// ```
pub struct RecordReader<R> {
    reader: R,
    /// 1-based number of the last line read, 0 before the first.
    line_number: usize,
    stats: ReadStats,
    warnings: Option<WarningCollector>,
    buf: Vec<u8>,
}

impl<R: BufRead> RecordReader<R> {
    /// Creates a new `RecordReader` over an already-buffered reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            stats: ReadStats::default(),
            warnings: None,
            buf: Vec::new(),
        }
    }

    /// Attaches a collector that receives a [`Warning`] for every skipped or
    /// lossily decoded line.
    #[must_use]
    pub fn with_warnings(mut self, warnings: WarningCollector) -> Self {
        self.warnings = Some(warnings);
        self
    }

    /// Returns the 1-based number of the last line read, or 0 before any
    /// line has been read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> ReadStats {
        self.stats
    }

    /// Reads the next record.
    ///
    /// Lines with fewer than two fields, including blank lines, are skipped.
    /// Fields past the second are discarded. Returns `Ok(None)` only at end
    /// of stream.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying reader fails.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        while let Some(line) = self.read_line()? {
            if let Some(record) = Record::from_line(&line) {
                self.stats.records_read += 1;
                tracing::trace!(line = self.line_number, "read record");
                return Ok(Some(record));
            }

            let fields = field_count(&line);
            self.stats.lines_skipped += 1;
            tracing::debug!(line = self.line_number, fields, "skipping line");
            self.warn(Warning::SkippedLine {
                line_number: self.line_number,
                fields,
            });
        }
        Ok(None)
    }

    /// Returns an iterator over the remaining records.
    ///
    /// The iterator ends after the first I/O error.
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            reader: self,
            failed: false,
        }
    }

    /// Reads one line without its terminator. `\n`, `\r\n` and a lone `\r`
    /// each end a line; a final line without a terminator is still returned.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let mut consumed_any = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if available.is_empty() {
                break;
            }
            consumed_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let terminator = available[end];
                    self.buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    if terminator == b'\r' {
                        self.skip_newline()?;
                    }
                    break;
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        if !consumed_any {
            return Ok(None);
        }
        self.line_number += 1;
        self.stats.lines_read += 1;

        let line = match std::str::from_utf8(&self.buf) {
            Ok(line) => line.to_owned(),
            Err(_) => {
                tracing::debug!(line = self.line_number, "replacing invalid UTF-8");
                self.warn(Warning::InvalidUtf8 {
                    line_number: self.line_number,
                });
                String::from_utf8_lossy(&self.buf).into_owned()
            }
        };
        Ok(Some(line))
    }

    /// Consumes a `\n` directly following a `\r`, if there is one.
    fn skip_newline(&mut self) -> Result<()> {
        loop {
            match self.reader.fill_buf() {
                Ok(next) => {
                    if next.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn warn(&self, warning: Warning) {
        if let Some(warnings) = &self.warnings {
            warnings.add(warning);
        }
    }

    /// Returns a reference to the underlying reader.
    #[must_use]
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consumes the reader, returning the underlying reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Iterator over the records of a [`RecordReader`], created by
/// [`RecordReader::records`].
pub struct Records<'a, R> {
    reader: &'a mut RecordReader<R>,
    failed: bool,
}

impl<R: BufRead> Iterator for Records<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let next = self.reader.read_record().transpose();
        self.failed = matches!(next, Some(Err(_)));
        next
    }
}
