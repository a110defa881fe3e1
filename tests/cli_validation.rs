//! CLI argument handling tests
//!
//! These drive the compiled binary and only cover paths that fail before
//! any network activity starts.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("lst").unwrap()
}

#[test]
fn test_help_lists_measurement_flags() {
    create_test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--size-mb"))
        .stdout(predicate::str::contains("--threads"))
        .stdout(predicate::str::contains("--serve"));
}

#[test]
fn test_version_flag() {
    create_test_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lan-speed-tester"));
}

#[test]
fn test_conflicting_direction_flags_rejected() {
    create_test_cmd()
        .arg("--download-only")
        .arg("--upload-only")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot specify both"));
}

#[test]
fn test_conflicting_color_flags_rejected() {
    create_test_cmd()
        .arg("--color")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot specify both"));
}

#[test]
fn test_zero_threads_rejected_before_any_transfer() {
    create_test_cmd()
        .arg("--threads")
        .arg("0")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Concurrency must be greater than 0"));
}

#[test]
fn test_zero_count_rejected() {
    create_test_cmd()
        .arg("--count")
        .arg("0")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Round count must be greater than 0"));
}

#[test]
fn test_invalid_url_rejected() {
    create_test_cmd()
        .arg("--url")
        .arg("not-a-url")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_env_file_feeds_configuration() {
    // An invalid value in a local .env must be caught by validation
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".env"), "LST_THREADS=0\n").unwrap();

    create_test_cmd()
        .current_dir(temp_dir.path())
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Concurrency must be greater than 0"));
}

#[test]
fn test_port_without_serve_rejected() {
    create_test_cmd()
        .arg("--port")
        .arg("9000")
        .assert()
        .failure();
}

#[test]
fn test_direction_flag_in_serve_mode_rejected() {
    create_test_cmd()
        .arg("--serve")
        .arg("--upload-only")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--serve mode"));
}
