#[cfg(test)]
extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use std::process::Command;

#[test]
fn test_cli() {
    let mut cmd = Command::cargo_bin("ssacl").expect("Calling binary failed");
    cmd.assert().failure();
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("ssacl").expect("Calling binary failed");
    cmd.arg("--version")
        .assert()
        .stdout(predicate::str::contains("ssacl 0.3.1"));
}

#[test]
fn test_check_group_missing_path() {
    // No Spectrum Scale install required: a path that cannot be stat'd
    // resolves to the ???? sentinel before any vendor tool runs.
    let mut cmd = Command::cargo_bin("ssacl").expect("Calling binary failed");
    cmd.args(["check-group", "/no/such/path/ssacl-cli-test", "staff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("????"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("ssacl").expect("Calling binary failed");
    cmd.arg("frobnicate").assert().failure();
}
