//! Record writing operations.
//!
//! This module serializes field lists as tab-joined lines with efficient
//! buffering.

use std::io::{BufWriter, Write};

use crate::options::{LineEnding, StreamOptions};
use crate::record::{Record, join_fields};
use crate::Result;

/// Counters maintained by a [`RecordWriter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Lines appended to the output.
    pub records_written: usize,
}

/// Writer for tab-delimited records.
///
/// `RecordWriter` wraps a writer in a [`BufWriter`]. Each call to
/// [`write_fields`](Self::write_fields) emits one line: the fields joined by
/// single tabs, followed by the configured [`LineEnding`]. An empty field
/// list writes nothing.
///
/// Any number of fields may be written, even though
/// [`RecordReader`](crate::RecordReader) only gives back the first two.
///
/// # Examples
///
/// ```
/// use addrcopy_tsv::RecordWriter;
///
/// let mut writer = RecordWriter::new(Vec::<u8>::new());
/// writer.write_fields(["A", "B"]).unwrap();
/// writer.flush().unwrap();
///
/// let bytes = writer.into_inner().into_inner().unwrap();
/// assert_eq!(bytes, b"A\tB\n");
/// ```
pub struct RecordWriter<W: Write> {
    writer: BufWriter<W>,
    line_ending: LineEnding,
    stats: WriteStats,
    line: String,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a new `RecordWriter` with default options.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, &StreamOptions::default())
    }

    /// Creates a new `RecordWriter` with the given buffer capacity and line
    /// terminator.
    #[must_use]
    pub fn with_options(writer: W, options: &StreamOptions) -> Self {
        Self {
            writer: BufWriter::with_capacity(options.buffer_capacity.max(1), writer),
            line_ending: options.line_ending,
            stats: WriteStats::default(),
            line: String::new(),
        }
    }

    /// Writes one line made of `fields`.
    ///
    /// Returns `false` without touching the output when `fields` is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_fields<I, S>(&mut self, fields: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line.clear();
        if !join_fields(fields, &mut self.line) {
            return Ok(false);
        }
        self.line.push_str(self.line_ending.as_str());
        self.writer.write_all(self.line.as_bytes())?;
        self.stats.records_written += 1;
        tracing::trace!(count = self.stats.records_written, "wrote record");
        Ok(true)
    }

    /// Writes a two-field record.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.write_fields([record.first(), record.second()])?;
        Ok(())
    }

    /// Flushes buffered lines to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> WriteStats {
        self.stats
    }

    /// Returns the line terminator in use.
    #[must_use]
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Returns a reference to the underlying buffered writer.
    #[must_use]
    pub fn get_ref(&self) -> &BufWriter<W> {
        &self.writer
    }

    /// Consumes the writer, returning the underlying buffered writer.
    ///
    /// Note: This does not flush the buffer. Call [`flush`](Self::flush)
    /// first, or unwrap the returned [`BufWriter`] which flushes on
    /// `into_inner`.
    #[must_use]
    pub fn into_inner(self) -> BufWriter<W> {
        self.writer
    }
}
