// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioural specs for the `csvseek` binary.
//!
//! The test files under `cli/` are compiled as integration tests of the
//! `csvseek` package (see `crates/cli/Cargo.toml`), which is where the binary
//! they drive is built.
