//! File-backed record stream opened in a single direction.
//!
//! [`RecordStream`] is the handle callers hold for a whole read or write
//! session. It starts unopened, is opened once in either [`Mode::Read`] or
//! [`Mode::Write`], and ends closed. Operations that do not match the current
//! state are absorbed: reading from a handle that is not reading returns
//! `None`, and writing to one that is not writing does nothing.

use std::fmt;
use std::fs::File;
use std::io::BufRead;
use std::mem;
use std::path::{Path, PathBuf};

use crate::encoding::decoding_reader;
use crate::options::StreamOptions;
use crate::reader::{ReadStats, RecordReader};
use crate::record::Record;
use crate::warning::WarningCollector;
use crate::writer::{RecordWriter, WriteStats};
use crate::{Error, Result};

/// Direction a [`RecordStream`] is opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Read records from an existing file.
    Read,
    /// Write records to a new or truncated file.
    Write,
}

impl Mode {
    /// Resolves a numeric direction tag: 1 is read, 2 is write.
    ///
    /// # Examples
    ///
    /// ```
    /// use addrcopy_tsv::Mode;
    ///
    /// assert_eq!(Mode::from_tag(1), Some(Mode::Read));
    /// assert_eq!(Mode::from_tag(2), Some(Mode::Write));
    /// assert_eq!(Mode::from_tag(3), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::Read),
            2 => Some(Self::Write),
            _ => None,
        }
    }

    /// The numeric tag of this direction.
    #[must_use]
    pub fn tag(self) -> u8 {
        match self {
            Self::Read => 1,
            Self::Write => 2,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Write => "write",
        })
    }
}

type FileReader = RecordReader<Box<dyn BufRead + Send>>;
type FileWriter = RecordWriter<File>;

enum State {
    Unopened,
    Reading(FileReader),
    Writing(FileWriter),
    Closed,
}

/// A handle owning one file opened for reading or for writing records.
///
/// The file is released by [`close`](Self::close) or when the handle is
/// dropped. Dropping a handle that is still writing flushes it; a failure at
/// that point can only be logged, so call `close` when the outcome matters.
///
/// # Examples
///
/// ```no_run
/// use addrcopy_tsv::{Mode, RecordStream};
///
/// # fn example() -> addrcopy_tsv::Result<()> {
/// let mut stream = RecordStream::new();
/// stream.open("/data/contacts.tsv", Mode::Read)?;
///
/// let mut count = 0;
/// while stream.read()?.is_some() {
///     count += 1;
/// }
/// stream.close()?;
/// println!("{count} records");
/// # Ok(())
/// # }
/// ```
pub struct RecordStream {
    state: State,
    path: Option<PathBuf>,
    options: StreamOptions,
    warnings: Option<WarningCollector>,
}

impl RecordStream {
    /// Creates an unopened handle with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(StreamOptions::default())
    }

    /// Creates an unopened handle that applies `options` when opened.
    #[must_use]
    pub fn with_options(options: StreamOptions) -> Self {
        Self {
            state: State::Unopened,
            path: None,
            options,
            warnings: None,
        }
    }

    /// Attaches a collector that receives warnings for lines skipped while
    /// reading. Applies to files opened after this call.
    #[must_use]
    pub fn with_warnings(mut self, warnings: WarningCollector) -> Self {
        self.warnings = Some(warnings);
        self
    }

    /// Opens `path` in the given direction.
    ///
    /// Reading starts at the beginning of the file and honors a leading
    /// byte-order mark. Writing creates the file or truncates an existing
    /// one. If the handle already holds a file, that file is closed first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened or created, and
    /// any error from closing a previously opened file.
    pub fn open<P: AsRef<Path>>(&mut self, path: P, mode: Mode) -> Result<()> {
        let path = path.as_ref();
        if !matches!(self.state, State::Unopened | State::Closed) {
            tracing::debug!(path = %path.display(), "reopening stream");
            self.close()?;
        }

        let open_error = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };
        let capacity = self.options.buffer_capacity.max(1);

        self.state = match mode {
            Mode::Read => {
                let file = File::open(path).map_err(open_error)?;
                let source = decoding_reader(file, capacity).map_err(open_error)?;
                let mut reader = RecordReader::new(source);
                if let Some(warnings) = &self.warnings {
                    reader = reader.with_warnings(warnings.clone());
                }
                State::Reading(reader)
            }
            Mode::Write => {
                let file = File::create(path).map_err(open_error)?;
                State::Writing(RecordWriter::with_options(file, &self.options))
            }
        };
        self.path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), %mode, "opened stream");
        Ok(())
    }

    /// Opens `path` using a numeric direction tag (see [`Mode::from_tag`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`], naming `path`, if `tag` is not a known
    /// direction. The handle is left untouched in that case. Otherwise fails
    /// as [`open`](Self::open) does.
    pub fn open_tagged<P: AsRef<Path>>(&mut self, path: P, tag: u8) -> Result<()> {
        let path = path.as_ref();
        let mode = Mode::from_tag(tag).ok_or_else(|| Error::InvalidMode {
            path: path.to_path_buf(),
            tag,
        })?;
        self.open(path, mode)
    }

    /// Reads the next record.
    ///
    /// Returns `Ok(None)` at end of file, and also whenever the handle is not
    /// open for reading.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading the underlying file fails.
    pub fn read(&mut self) -> Result<Option<Record>> {
        match &mut self.state {
            State::Reading(reader) => reader.read_record(),
            _ => Ok(None),
        }
    }

    /// Appends one line made of `fields`, joined by tabs.
    ///
    /// An empty field list writes nothing. When the handle is not open for
    /// writing the call does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing the underlying file fails.
    pub fn write<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let State::Writing(writer) = &mut self.state {
            writer.write_fields(fields)?;
        }
        Ok(())
    }

    /// Flushes buffered output when open for writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying file cannot be written.
    pub fn flush(&mut self) -> Result<()> {
        if let State::Writing(writer) = &mut self.state {
            writer.flush()?;
        }
        Ok(())
    }

    /// Releases the file held by this handle, flushing pending output first.
    ///
    /// Closing an unopened or already closed handle does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if pending output cannot be flushed. The file is
    /// released regardless.
    pub fn close(&mut self) -> Result<()> {
        let path = self.path.take();
        match mem::replace(&mut self.state, State::Closed) {
            State::Writing(mut writer) => {
                writer.flush()?;
                tracing::debug!(
                    path = ?path,
                    records = writer.stats().records_written,
                    "closed writer"
                );
            }
            State::Reading(reader) => {
                let stats = reader.stats();
                tracing::debug!(
                    path = ?path,
                    records = stats.records_read,
                    skipped = stats.lines_skipped,
                    "closed reader"
                );
            }
            State::Unopened | State::Closed => {}
        }
        Ok(())
    }

    /// The direction the handle is currently open in, if any.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        match self.state {
            State::Reading(_) => Some(Mode::Read),
            State::Writing(_) => Some(Mode::Write),
            State::Unopened | State::Closed => None,
        }
    }

    /// Returns `true` while a file is held.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.mode().is_some()
    }

    /// The path of the file currently held.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The options applied when opening.
    #[must_use]
    pub fn options(&self) -> &StreamOptions {
        &self.options
    }

    /// Read counters for the current session, if open for reading.
    #[must_use]
    pub fn read_stats(&self) -> Option<ReadStats> {
        match &self.state {
            State::Reading(reader) => Some(reader.stats()),
            _ => None,
        }
    }

    /// Write counters for the current session, if open for writing.
    #[must_use]
    pub fn write_stats(&self) -> Option<WriteStats> {
        match &self.state {
            State::Writing(writer) => Some(writer.stats()),
            _ => None,
        }
    }
}

impl Default for RecordStream {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecordStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Unopened => "unopened",
            State::Reading(_) => "reading",
            State::Writing(_) => "writing",
            State::Closed => "closed",
        };
        f.debug_struct("RecordStream")
            .field("state", &state)
            .field("path", &self.path)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Drop for RecordStream {
    fn drop(&mut self) {
        if let State::Writing(writer) = &mut self.state {
            if let Err(e) = writer.flush() {
                tracing::warn!(path = ?self.path, error = %e, "failed to flush records on drop");
            }
        }
    }
}
