// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line codec: one physical line to raw fields and back.
//!
//! Splitting and joining are plain delimiter operations with no quoting, so
//! `join(split(line)) == line` for every line.

/// The unparsed field values of one line.
pub type RawLine = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCodec {
    delimiter: char,
}

impl LineCodec {
    pub fn new(delimiter: char) -> Self {
        LineCodec { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Splits one line (without terminator) into fields.
    pub fn split(&self, line: &str) -> RawLine {
        line.split(self.delimiter).map(str::to_string).collect()
    }

    /// Joins fields into one line (without terminator).
    pub fn join<V: AsRef<str>>(&self, values: &[V]) -> String {
        let mut line = String::with_capacity(self.encoded_len(values) as usize);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                line.push(self.delimiter);
            }
            line.push_str(value.as_ref());
        }
        line
    }

    /// Byte length of the joined fields: field bytes plus delimiters.
    pub fn encoded_len<V: AsRef<str>>(&self, values: &[V]) -> u64 {
        let fields: usize = values.iter().map(|v| v.as_ref().len()).sum();
        let delimiters = values.len().saturating_sub(1) * self.delimiter.len_utf8();
        (fields + delimiters) as u64
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
