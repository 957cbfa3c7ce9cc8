use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("cpi").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cpi"));
}

#[test]
fn inverted_range_halts_before_any_network_call() {
    let dir = tempfile::tempdir().unwrap();
    let plot = dir.path().join("cpi.svg");
    let mut cmd = Command::cargo_bin("cpi").unwrap();
    cmd.args(["product", "CUUR0000SA0", "-s", "2019", "-e", "2009", "--plot"])
        .arg(&plot);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("end year"));
    // Validation failed first, so no chart was produced.
    assert!(!plot.exists());
}

#[test]
fn pre_1995_start_halts_before_any_network_call() {
    let dir = tempfile::tempdir().unwrap();
    let plot = dir.path().join("cpi.svg");
    let mut cmd = Command::cargo_bin("cpi").unwrap();
    cmd.args(["product", "CUUR0000SA0", "-s", "1990", "-e", "2019", "--plot"])
        .arg(&plot);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("1995"));
    assert!(!plot.exists());
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn fetch_online_cpi() {
    let dir = tempfile::tempdir().unwrap();
    let plot = dir.path().join("cpi.svg");
    let mut cmd = Command::cargo_bin("cpi").unwrap();
    cmd.args(["product", "CUUR0000SA0", "-s", "2015", "-e", "2019", "--stats", "--plot"])
        .arg(&plot);
    cmd.assert().success();
}
