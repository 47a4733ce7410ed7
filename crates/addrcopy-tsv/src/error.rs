//! Error types for addrcopy-tsv operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for addrcopy-tsv operations.
///
/// Only failures to acquire or drive the underlying file surface here.
/// Malformed lines are never errors; they are skipped by the reader.
#[derive(Debug, Error)]
pub enum Error {
    /// The direction requested at open time is neither read nor write.
    #[error("Unknown file mode {tag} for {}", path.display())]
    InvalidMode {
        /// Path the caller tried to open.
        path: PathBuf,
        /// The raw direction tag that was rejected.
        tag: u8,
    },

    /// The underlying file could not be opened or created.
    #[error("error opening/locating the file {}: {source}", path.display())]
    Open {
        /// Path the caller tried to open.
        path: PathBuf,
        /// The low-level failure reported by the file system.
        #[source]
        source: io::Error,
    },

    /// IO error occurred while reading, writing, or flushing an open stream.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns `true` for failures caused by the file system rather than by
    /// the caller's arguments.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Io(_))
    }
}

/// A specialized Result type for addrcopy-tsv operations.
pub type Result<T> = std::result::Result<T, Error>;
