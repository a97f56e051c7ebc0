//! Smoke tests for the relnote binary.
//!
//! Network-dependent paths are covered by the forge and pipeline tests;
//! these only exercise argument parsing and early failures.

use assert_cmd::Command;
use predicates::prelude::*;

fn relnote() -> Command {
    Command::cargo_bin("relnote").unwrap()
}

#[test]
fn help_lists_commands() {
    relnote()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("publish"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn version_prints() {
    relnote()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn publish_requires_tags() {
    relnote()
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--tag"));
}

#[test]
fn publish_without_token_fails_early() {
    relnote()
        .args([
            "publish",
            "--tag",
            "v1.1.0",
            "--prev-tag",
            "v1.0.0",
            "--owner",
            "o",
            "--repo",
            "r",
        ])
        .env_remove("GITHUB_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("token"));
}

#[test]
fn missing_explicit_config_fails() {
    relnote()
        .args([
            "preview",
            "--tag",
            "v1.1.0",
            "--prev-tag",
            "v1.0.0",
            "--config",
            "/definitely/not/here.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn unknown_flag_fails() {
    relnote()
        .args(["publish", "--tag", "a", "--prev-tag", "b", "--bogus"])
        .assert()
        .failure();
}
