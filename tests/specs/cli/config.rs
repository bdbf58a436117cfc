// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for config file discovery and flag precedence.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[test]
fn local_config_file_is_used() {
    let temp = temp_with_data("id;name\n1;one\n");
    std::fs::write(temp.path().join("csvseek.toml"), "delimiter = \";\"\nheader = true\n").unwrap();

    csvseek(&temp)
        .args(["get", "data.csv", "0"])
        .assert()
        .success()
        .stdout("1;one\n");
}

#[test]
fn user_config_file_is_used() {
    let temp = temp_with_data("id|name\n1|one\n");
    let user_dir = temp.path().join("user-config");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "delimiter = \"|\"\n").unwrap();

    csvseek(&temp)
        .args(["count", "data.csv"])
        .assert()
        .success()
        .stdout("2\n");
    csvseek(&temp)
        .args(["get", "data.csv", "1"])
        .assert()
        .success()
        .stdout("1|one\n");
}

#[test]
fn local_config_wins_over_user_config() {
    let temp = temp_with_data("a;b\n");
    let user_dir = temp.path().join("user-config");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "header = true\n").unwrap();
    std::fs::write(temp.path().join("csvseek.toml"), "delimiter = \";\"\n").unwrap();

    csvseek(&temp)
        .args(["count", "data.csv"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn explicit_config_path() {
    let temp = temp_with_data("h\nx\n");
    std::fs::write(temp.path().join("alt.toml"), "header = true\noutput = \"json\"\n").unwrap();

    let output = csvseek(&temp)
        .args(["--config", "alt.toml", "read", "data.csv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!([{ "line": 0, "fields": ["x"] }]));
}

#[test]
fn flags_override_config_file() {
    let temp = temp_with_data("a;b\n");
    std::fs::write(temp.path().join("csvseek.toml"), "delimiter = \";\"\noutput = \"json\"\n").unwrap();

    csvseek(&temp)
        .args(["read", "data.csv", "-o", "text", "--delimiter", ","])
        .assert()
        .success()
        .stdout("a;b\n");
}

#[test]
fn missing_explicit_config_fails() {
    let temp = temp_with_data("a\n");
    csvseek(&temp)
        .args(["--config", "nope.toml", "count", "data.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: config error: failed to read"));
}

#[test]
fn invalid_config_fails() {
    let temp = temp_with_data("a\n");
    std::fs::write(temp.path().join("csvseek.toml"), "newline = \"cr\"\n").unwrap();

    csvseek(&temp)
        .args(["count", "data.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}
