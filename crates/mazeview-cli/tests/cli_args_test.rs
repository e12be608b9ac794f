#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_search_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mazeview");
    cmd.args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn test_search_missing_query() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mazeview");
    cmd.args(["search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_show_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mazeview");
    cmd.args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--id"));
}

#[test]
fn test_show_missing_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mazeview");
    cmd.args(["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_episodes_help_mentions_filter() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mazeview");
    cmd.args(["episodes", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--filter"));
}

#[test]
fn test_episode_requires_show_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mazeview");
    cmd.args(["episode", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--show-id"));
}

#[test]
fn test_episode_rejects_non_numeric_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mazeview");
    cmd.args(["episode", "--id", "abc", "--show-id", "1"])
        .assert()
        .failure();
}

#[test]
fn test_browse_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mazeview");
    cmd.args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"));
}
