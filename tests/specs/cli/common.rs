// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Command isolated from any user-level config file.
pub fn csvseek(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("csvseek");
    cmd.current_dir(temp.path())
        .env("CSVSEEK_CONFIG_DIR", temp.path().join("user-config"))
        .env_remove("CSVSEEK_LOG");
    cmd
}

/// Temp directory holding `data.csv` with the given content.
pub fn temp_with_data(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("data.csv"), content).unwrap();
    temp
}

pub fn data_path(temp: &TempDir) -> PathBuf {
    temp.path().join("data.csv")
}

pub fn read_data(temp: &TempDir) -> String {
    std::fs::read_to_string(data_path(temp)).unwrap()
}
