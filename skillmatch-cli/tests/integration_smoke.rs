//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn skillmatch() -> Command {
    let mut cmd = Command::cargo_bin("skillmatch").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("SKILLMATCH_JWT_SECRET")
        .env_remove("SKILLMATCH_JWT_ISSUER")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    skillmatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("token"));
}

#[test]
fn test_serve_help() {
    skillmatch()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_token_prints_jwt() {
    skillmatch()
        .args(["token", "--user-id", "5", "--jwt-secret", "s3cret"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[\w-]+\.[\w-]+\.[\w-]+\n$").unwrap());
}

#[test]
fn test_token_requires_secret() {
    skillmatch()
        .args(["token", "--user-id", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SKILLMATCH_JWT_SECRET"));
}

#[test]
fn test_serve_requires_database_url() {
    skillmatch()
        .args(["serve", "--jwt-secret", "s3cret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_completions_bash() {
    skillmatch()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skillmatch"));
}
