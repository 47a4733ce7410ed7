//! Warning types for lines the reader absorbed instead of returning.
//!
//! Skipping a line is never an error, but callers that want to report what
//! was dropped can attach a [`WarningCollector`] to a reader or stream and
//! inspect it afterwards.
//!
//! # Examples
//!
//! ```
//! use addrcopy_tsv::warning::{Warning, WarningCollector};
//!
//! let collector = WarningCollector::new();
//!
//! collector.add(Warning::SkippedLine {
//!     line_number: 2,
//!     fields: 1,
//! });
//! collector.add(Warning::InvalidUtf8 { line_number: 7 });
//!
//! let warnings = collector.into_warnings();
//! assert_eq!(warnings.len(), 2);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A line-level issue that did not interrupt reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A line split into fewer than two fields and was not returned as a
    /// record. Blank lines land here with `fields == 1`.
    SkippedLine {
        /// The 1-based line number that was skipped.
        line_number: usize,
        /// How many tab-separated fields the line had.
        fields: usize,
    },

    /// A line contained bytes that are not valid UTF-8. The offending bytes
    /// were replaced with U+FFFD and the line was processed normally.
    InvalidUtf8 {
        /// The 1-based line number that was decoded lossily.
        line_number: usize,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::SkippedLine { line_number, .. } | Self::InvalidUtf8 { line_number } => {
                *line_number
            }
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use addrcopy_tsv::warning::Warning;
    ///
    /// let warning = Warning::SkippedLine { line_number: 5, fields: 1 };
    /// assert_eq!(warning.description(), "line 5: skipped: 1 field(s), need 2");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::SkippedLine {
                line_number,
                fields,
            } => format!("line {line_number}: skipped: {fields} field(s), need 2"),
            Self::InvalidUtf8 { line_number } => {
                format!("line {line_number}: invalid UTF-8 replaced")
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SkippedLine { .. } => "skipped_line",
            Self::InvalidUtf8 { .. } => "invalid_utf8",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

/// A shareable collector for warnings produced while reading.
///
/// Clones share the same storage, so a caller can keep one handle while
/// passing another into a [`RecordStream`](crate::RecordStream). A poisoned
/// lock is recovered rather than propagated; the stored warnings are plain
/// data and stay consistent.
///
/// The collector grows without bound. For very dirty inputs call
/// [`clear`](Self::clear) between batches.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl WarningCollector {
    /// Creates a new empty `WarningCollector`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Warning>> {
        self.warnings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a warning to the collector.
    pub fn add(&self, warning: Warning) {
        self.lock().push(warning);
    }

    /// Returns the number of warnings collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no warnings have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of all collected warnings without consuming the
    /// collector.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.lock().clone()
    }

    /// Clears all collected warnings.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Consumes the collector and returns all collected warnings.
    ///
    /// If this is the last handle the warnings are moved out, otherwise they
    /// are cloned.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        match Arc::try_unwrap(self.warnings) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => shared
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}
