//! CLI surface smoke tests. These never enter the TUI.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_flags() {
    Command::cargo_bin("otp-demo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--length")
                .and(predicate::str::contains("--placeholder"))
                .and(predicate::str::contains("--autofocus")),
        );
}

#[test]
fn rejects_out_of_range_length() {
    Command::cargo_bin("otp-demo")
        .unwrap()
        .args(["--length", "9"])
        .assert()
        .failure();
}

#[test]
fn rejects_multi_char_placeholder() {
    Command::cargo_bin("otp-demo")
        .unwrap()
        .args(["--placeholder", "ab"])
        .assert()
        .failure();
}
