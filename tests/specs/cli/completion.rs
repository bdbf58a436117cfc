// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

fn csvseek() -> Command {
    cargo_bin_cmd!("csvseek")
}

// =============================================================================
// Parameterized tests for shell completion generation
// =============================================================================

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = csvseek().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "Completion output should not be empty");
}

#[test]
fn completion_bash_references_commands() {
    let output = csvseek().args(["completion", "bash"]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("complete"));
    for command in ["read", "get", "append", "insert", "count", "header"] {
        assert!(stdout.contains(command), "missing {command}");
    }
}

#[test]
fn completion_zsh_has_compdef() {
    let output = csvseek().args(["completion", "zsh"]).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("#compdef csvseek"));
}

#[test]
fn completion_invalid_shell_fails() {
    csvseek()
        .args(["completion", "invalid_shell"])
        .assert()
        .failure();
}
