//! Configuration management for addrcopy.
//!
//! Settings come from an optional YAML file and are then overridden by
//! command-line flags:
//!
//! ```yaml
//! buffer-capacity: 65536
//! line-ending: crlf
//! ```

use std::path::Path;

use addrcopy_tsv::options::DEFAULT_BUFFER_CAPACITY;
use addrcopy_tsv::{LineEnding, StreamOptions};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for addrcopy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Read and write buffer size in bytes
    #[serde(rename = "buffer-capacity")]
    pub buffer_capacity: usize,

    /// Terminator for written lines: "lf", "crlf", or "native"
    #[serde(rename = "line-ending")]
    pub line_ending: String,
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or does not hold
    /// a valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Fails as [`load`](Self::load) does when a path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    fn validate(&self) -> Result<()> {
        if self.buffer_capacity == 0 {
            return Err(Error::Config("buffer-capacity must be at least 1".to_string()));
        }
        self.line_ending.parse::<LineEnding>().map_err(Error::Config)?;
        Ok(())
    }

    /// Convert to the options the record streams are opened with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `line-ending` is not a known terminator.
    pub fn stream_options(&self) -> Result<StreamOptions> {
        let line_ending = self.line_ending.parse::<LineEnding>().map_err(Error::Config)?;
        Ok(StreamOptions::default()
            .with_buffer_capacity(self.buffer_capacity)
            .with_line_ending(line_ending))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            line_ending: LineEnding::Lf.to_string(),
        }
    }
}
