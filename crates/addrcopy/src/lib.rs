//! Addrcopy - copy and inspect tab-delimited address files.
//!
//! This crate provides the `addrcopy` binary and the library pieces it is
//! built from. Record parsing lives in `addrcopy-tsv`; this crate only wires
//! source and destination files together and reports what happened.

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
