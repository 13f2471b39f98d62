//! Binary-level checks that run without a terminal or a service

use assert_cmd::Command;
use predicates::prelude::*;

fn revu() -> Command {
    Command::cargo_bin("revu").unwrap()
}

#[test]
fn test_help_lists_options() {
    revu()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_version() {
    revu()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("revu"));
}

#[test]
fn test_invalid_url_fails_before_terminal() {
    revu()
        .args(["--url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid service URL"));
}

#[test]
fn test_unsupported_scheme_fails() {
    revu()
        .args(["--url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid service URL"));
}

#[test]
fn test_unknown_source_is_rejected() {
    revu()
        .args(["--source", "tripadvisor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    revu()
        .arg("--config")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
