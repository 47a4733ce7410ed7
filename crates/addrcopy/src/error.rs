//! Error types for addrcopy CLI operations.

use std::io;
use thiserror::Error;

/// The error type for addrcopy CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record stream error.
    #[error(transparent)]
    Stream(#[from] addrcopy_tsv::Error),

    /// Source and destination resolve to the same file.
    #[error("source and destination are the same file: {0}")]
    SameFile(String),
}

/// A specialized Result type for addrcopy operations.
pub type Result<T> = std::result::Result<T, Error>;
