//! CLI-specific type wrappers for clap argument parsing.

use addrcopy_tsv::LineEnding;
use clap::ValueEnum;

/// Line terminator argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineEndingArg {
    /// `\n`
    Lf,
    /// `\r\n`
    Crlf,
    /// The platform convention
    Native,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
            LineEndingArg::Native => LineEnding::native(),
        }
    }
}
