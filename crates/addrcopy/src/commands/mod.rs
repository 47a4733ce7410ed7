//! Command implementations.
//!
//! Each command drives `addrcopy-tsv` record streams and returns a summary
//! that the CLI layer renders as text or JSON.

pub mod copy;
pub mod count;
