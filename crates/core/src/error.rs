// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for csvseek-core operations.

use thiserror::Error;

/// All possible errors that can occur in csvseek-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("operation not supported: the underlying stream cannot seek")]
    NotSeekable,

    #[error("line {line} is out of bounds\n  hint: lines are zero-based; use append to add past the last line")]
    LineOutOfBounds { line: i64 },

    #[error("header line missing\n  hint: the stream is empty and has no header yet")]
    HeaderMissing,

    #[error("header does not have the expected columns: expected {}, found {}", expected.join(","), actual.join(","))]
    HeaderColumnsMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("{actual} values do not match the {expected} header columns")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("invalid UTF-8 in line starting at byte {offset}")]
    InvalidEncoding { offset: u64 },

    #[error("column not found: {0}")]
    MissingColumn(String),

    #[error("mapping error: {0}")]
    Mapping(String),

    #[error("operation cancelled before it started")]
    Cancelled,

    #[error("stream is closed")]
    Closed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for csvseek-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
