// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sparse line-number → byte-offset index.
//!
//! The index is a cache of lines visited so far, not a complete table. Keys
//! and offsets increase together: line `n` never starts before line `n - 1`.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    offsets: BTreeMap<i64, u64>,
}

impl LineIndex {
    pub fn new() -> Self {
        LineIndex::default()
    }

    pub fn get(&self, line: i64) -> Option<u64> {
        self.offsets.get(&line).copied()
    }

    pub fn insert(&mut self, line: i64, offset: u64) {
        debug_assert!(
            self.offsets.range(..line).next_back().is_none_or(|(_, &prev)| prev <= offset),
            "line {line} at {offset} starts before its predecessor"
        );
        self.offsets.insert(line, offset);
    }

    /// Greatest indexed line strictly before `line`, with its offset.
    pub fn floor_below(&self, line: i64) -> Option<(i64, u64)> {
        self.offsets
            .range(..line)
            .next_back()
            .map(|(&line, &offset)| (line, offset))
    }

    /// Highest indexed line number.
    pub fn last_line(&self) -> Option<i64> {
        self.offsets.keys().next_back().copied()
    }

    /// Drops every entry at or after `line`.
    pub fn discard_from(&mut self, line: i64) {
        self.offsets.split_off(&line);
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Entries in line order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.offsets.iter().map(|(&line, &offset)| (line, offset))
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
