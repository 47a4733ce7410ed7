//! Integration tests for the addrcopy CLI.
//!
//! These tests run the built binary against files in a temporary directory.

use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;

mod common;
use common::{run_addrcopy_in_dir, stderr, stdout};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Provides a temporary directory holding `contacts.tsv` with three
/// well-formed records among malformed lines
#[fixture]
fn contacts_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        temp.path().join("contacts.tsv"),
        "Ann\tOak St.\n\nBo\tElm St.\tExtra\nheader-only\nCy\tPine Rd.\n",
    )
    .expect("Failed to write fixture");
    temp
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[rstest]
fn test_cli_help(contacts_dir: TempDir) {
    let output = run_addrcopy_in_dir(contacts_dir.path(), &["--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("addrcopy"));
    assert!(out.contains("Usage:"));
    assert!(out.contains("copy"));
    assert!(out.contains("count"));
}

#[rstest]
fn test_cli_version(contacts_dir: TempDir) {
    let output = run_addrcopy_in_dir(contacts_dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Copy Tests
// ============================================================================

#[rstest]
fn test_copy_writes_two_field_records(contacts_dir: TempDir) {
    let output = run_addrcopy_in_dir(
        contacts_dir.path(),
        &["copy", "contacts.tsv", "contacts-out.tsv"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Copied 3 record(s)"));
    assert_eq!(
        fs::read_to_string(contacts_dir.path().join("contacts-out.tsv")).unwrap(),
        "Ann\tOak St.\nBo\tElm St.\nCy\tPine Rd.\n"
    );
}

#[rstest]
fn test_copy_json_summary(contacts_dir: TempDir) {
    let output = run_addrcopy_in_dir(
        contacts_dir.path(),
        &["--json", "copy", "contacts.tsv", "out.tsv", "--report-skipped"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["records_copied"], 3);
    assert_eq!(parsed["lines_read"], 5);
    assert_eq!(parsed["lines_skipped"], 2);
    assert_eq!(parsed["warnings"].as_array().unwrap().len(), 2);
}

#[rstest]
fn test_copy_crlf_override(contacts_dir: TempDir) {
    let output = run_addrcopy_in_dir(
        contacts_dir.path(),
        &["copy", "contacts.tsv", "out.tsv", "--line-ending", "crlf"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        fs::read_to_string(contacts_dir.path().join("out.tsv")).unwrap(),
        "Ann\tOak St.\r\nBo\tElm St.\r\nCy\tPine Rd.\r\n"
    );
}

#[rstest]
fn test_copy_uses_config_file(contacts_dir: TempDir) {
    fs::write(
        contacts_dir.path().join("addrcopy.yaml"),
        "line-ending: crlf\nbuffer-capacity: 16\n",
    )
    .unwrap();

    let output = run_addrcopy_in_dir(
        contacts_dir.path(),
        &["copy", "contacts.tsv", "out.tsv", "--config", "addrcopy.yaml"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let written = fs::read_to_string(contacts_dir.path().join("out.tsv")).unwrap();
    assert_eq!(written.matches("\r\n").count(), 3);
}

#[rstest]
fn test_copy_missing_source_fails(contacts_dir: TempDir) {
    let output = run_addrcopy_in_dir(contacts_dir.path(), &["copy", "nope.tsv", "out.tsv"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("failed to copy nope.tsv to out.tsv"));
    assert!(err.contains("error opening/locating the file nope.tsv"));
    assert!(!contacts_dir.path().join("out.tsv").exists());
}

#[rstest]
fn test_copy_onto_itself_fails(contacts_dir: TempDir) {
    let output = run_addrcopy_in_dir(
        contacts_dir.path(),
        &["copy", "contacts.tsv", "./contacts.tsv"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("same file"));
    let untouched = fs::read_to_string(contacts_dir.path().join("contacts.tsv")).unwrap();
    assert!(untouched.starts_with("Ann\tOak St.\n"));
}

// ============================================================================
// Count Tests
// ============================================================================

#[rstest]
fn test_count_text(contacts_dir: TempDir) {
    let output = run_addrcopy_in_dir(contacts_dir.path(), &["count", "contacts.tsv"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("3 record(s) in 5 line(s)"));
    assert!(out.contains("Skipped 2 line(s)"));
}

#[rstest]
fn test_count_json(contacts_dir: TempDir) {
    let output = run_addrcopy_in_dir(contacts_dir.path(), &["count", "contacts.tsv", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["records"], 3);
    assert!(parsed.get("warnings").is_none());
}

#[rstest]
fn test_invalid_config_fails(contacts_dir: TempDir) {
    fs::write(contacts_dir.path().join("bad.yaml"), "line-ending: cr\n").unwrap();

    let output = run_addrcopy_in_dir(
        contacts_dir.path(),
        &["count", "contacts.tsv", "--config", "bad.yaml"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Configuration error"));
}
