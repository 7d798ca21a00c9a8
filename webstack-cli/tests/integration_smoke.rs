//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help_lists_services() {
    let mut cmd = Command::cargo_bin("webstack").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("blog"))
        .stdout(predicate::str::contains("dbcheck"));
}

#[test]
fn test_blog_help() {
    let mut cmd = Command::cargo_bin("webstack").unwrap();
    cmd.arg("blog").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_blog_requires_database_url() {
    let mut cmd = Command::cargo_bin("webstack").unwrap();
    cmd.env_remove("DATABASE_URL")
        .current_dir(std::env::temp_dir())
        .arg("blog");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}

#[test]
fn test_dbcheck_help() {
    let mut cmd = Command::cargo_bin("webstack").unwrap();
    cmd.arg("dbcheck").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("legacy"))
        .stdout(predicate::str::contains("--db-host"));
}

#[test]
fn test_dbcheck_rejects_unknown_failure_status() {
    let mut cmd = Command::cargo_bin("webstack").unwrap();
    cmd.arg("dbcheck").arg("--failure-status").arg("loud");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid failure status"));
}
