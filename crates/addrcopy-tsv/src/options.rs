//! Tuning knobs shared by the reader, the writer, and the file handle.

use std::fmt;
use std::str::FromStr;

/// Default buffer capacity for both directions, in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Terminator appended after every written line.
///
/// Reading accepts both forms regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// The conventional terminator of the platform this was compiled for.
    #[must_use]
    pub fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lf => "lf",
            Self::CrLf => "crlf",
        })
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" | "unix" => Ok(Self::Lf),
            "crlf" | "windows" => Ok(Self::CrLf),
            "native" => Ok(Self::native()),
            other => Err(format!(
                "Invalid line ending: '{other}'. Must be one of: lf, crlf, native"
            )),
        }
    }
}

/// Options applied when a [`RecordStream`](crate::RecordStream) opens a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamOptions {
    /// Capacity of the read or write buffer, in bytes.
    pub buffer_capacity: usize,
    /// Terminator written after each line.
    pub line_ending: LineEnding,
}

impl StreamOptions {
    /// Returns these options with a different buffer capacity. A capacity of
    /// zero is raised to one byte.
    #[must_use]
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }

    /// Returns these options with a different line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            line_ending: LineEnding::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_options() {
        let options = StreamOptions::default();
        assert_eq!(options.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
        assert_eq!(options.line_ending, LineEnding::Lf);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let options = StreamOptions::default().with_buffer_capacity(0);
        assert_eq!(options.buffer_capacity, 1);
    }

    #[rstest]
    #[case("lf", LineEnding::Lf)]
    #[case("LF", LineEnding::Lf)]
    #[case("unix", LineEnding::Lf)]
    #[case("crlf", LineEnding::CrLf)]
    #[case(" CRLF ", LineEnding::CrLf)]
    #[case("windows", LineEnding::CrLf)]
    fn parses_line_endings(#[case] input: &str, #[case] expected: LineEnding) {
        assert_eq!(input.parse::<LineEnding>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_line_ending() {
        let err = "cr".parse::<LineEnding>().unwrap_err();
        assert!(err.contains("'cr'"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for ending in [LineEnding::Lf, LineEnding::CrLf] {
            assert_eq!(ending.to_string().parse::<LineEnding>().unwrap(), ending);
        }
    }
}
