//! Basic CLI tests for sv
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sv() -> Command {
    let mut cmd = Command::cargo_bin("sv").unwrap();
    // Keep the user's config file out of the tests
    cmd.env("SPLITVIEW_CONFIG", "/nonexistent/splitview/config.toml");
    cmd
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    sv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("sv [OPTIONS] [PATH]"))
        .stdout(predicate::str::contains("--no-watch"));
}

#[test]
fn help_short_flag_shows_usage() {
    sv().arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn help_lists_key_bindings() {
    sv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ctrl+c"))
        .stdout(predicate::str::contains("Open the selected file"));
}

#[test]
fn version_flag_shows_version() {
    sv().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_short_flag_shows_version() {
    sv().arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Options (Exit Code 3)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_3() {
    sv().arg("--unknown-option")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn invalid_short_option_returns_exit_code_3() {
    sv().arg("-x")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("-x"));
}

#[test]
fn nonexistent_path_returns_exit_code_3() {
    sv().arg("/nonexistent/path/that/does/not/exist")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn second_path_returns_exit_code_3() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    sv().arg(first.path())
        .arg(second.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unexpected argument"));
}

// =============================================================================
// Valid Paths and Flags
// =============================================================================

#[test]
fn temp_directory_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    // --help keeps the TUI from starting
    sv().arg(temp_dir.path()).arg("--help").assert().success();
}

#[test]
fn file_path_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("notes.txt");
    std::fs::write(&file, "notes").unwrap();
    sv().arg(&file).arg("--help").assert().success();
}

#[test]
fn display_flags_are_accepted() {
    sv().args(["--hidden", "--no-hidden", "-a", "--no-watch", "--help"])
        .assert()
        .success();
}

#[test]
fn broken_config_file_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    std::fs::write(&config, "[general\nshow_hidden = ").unwrap();
    sv().env("SPLITVIEW_CONFIG", &config)
        .arg("--help")
        .assert()
        .success();
}
