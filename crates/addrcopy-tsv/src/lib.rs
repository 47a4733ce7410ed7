//! Forward-only streaming of two-column tab-delimited records.
//!
//! This library reads and writes plain-text files holding one record per
//! line, with the two significant fields separated by a horizontal tab. Lines
//! that cannot form a record (blank lines, lines without a tab) are skipped
//! rather than rejected, so a single pass over a large file never stops on
//! malformed data.
//!
//! The entry point for file-backed work is [`RecordStream`], a handle opened
//! in exactly one [`Mode`]. The [`RecordReader`] and [`RecordWriter`] layers
//! underneath it work on any [`std::io::BufRead`] / [`std::io::Write`] and are
//! usable on their own.
//!
//! # Examples
//!
//! ```no_run
//! use addrcopy_tsv::{Mode, RecordStream};
//!
//! # fn example() -> addrcopy_tsv::Result<()> {
//! let mut source = RecordStream::new();
//! let mut dest = RecordStream::new();
//! source.open("/data/contacts.tsv", Mode::Read)?;
//! dest.open("/data/contacts-out.tsv", Mode::Write)?;
//!
//! while let Some(record) = source.read()? {
//!     dest.write([record.first(), record.second()])?;
//! }
//!
//! source.close()?;
//! dest.close()?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod encoding;
pub mod error;
pub mod options;
pub mod reader;
pub mod record;
pub mod stream;
pub mod warning;
pub mod writer;

pub use error::{Error, Result};
pub use options::{LineEnding, StreamOptions};
pub use reader::{ReadStats, RecordReader, Records};
pub use record::Record;
pub use stream::{Mode, RecordStream};
pub use warning::{Warning, WarningCollector};
pub use writer::{RecordWriter, WriteStats};
