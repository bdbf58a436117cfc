// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stream options: delimiter, header mode and line terminator.
//!
//! Options deserialize from TOML (or any serde format) with every field
//! optional, so a config file only needs to name what differs from the
//! defaults.

use serde::{Deserialize, Serialize};

/// Line terminator written by the positioned writer.
///
/// The reader accepts both forms regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLine {
    #[default]
    Lf,
    CrLf,
}

impl NewLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewLine::Lf => "\n",
            NewLine::CrLf => "\r\n",
        }
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    /// Byte length of the terminator.
    pub fn byte_len(&self) -> u64 {
        self.as_bytes().len() as u64
    }
}

/// Configuration shared by the reader, writer and indexed stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Field delimiter.
    pub delimiter: char,
    /// Whether line 0 of the physical stream holds column names.
    #[serde(rename = "header")]
    pub has_header: bool,
    /// Expected column names. Written as the header when a header-mode
    /// stream is empty, and validated against an existing header otherwise.
    #[serde(rename = "columns", skip_serializing_if = "Option::is_none")]
    pub column_names: Option<Vec<String>>,
    /// Terminator for written lines.
    pub newline: NewLine,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            delimiter: ',',
            has_header: false,
            column_names: None,
            newline: NewLine::Lf,
        }
    }
}

impl Options {
    /// Header-mode options with the given expected columns.
    pub fn with_header<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Options {
            has_header: true,
            column_names: Some(columns.into_iter().map(Into::into).collect()),
            ..Options::default()
        }
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn newline(mut self, newline: NewLine) -> Self {
        self.newline = newline;
        self
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
