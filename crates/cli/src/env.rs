// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables the CLI reads.
//!
//! Names are generated by `build.rs` into [`vars`]; accessors that need more
//! than a lookup live here.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `CSVSEEK_CONFIG_DIR` if set.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var(vars::CSVSEEK_CONFIG_DIR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
