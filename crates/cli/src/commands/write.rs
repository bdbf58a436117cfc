// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that modify the file: `append` and `insert`.

use std::io::{self, Write};
use std::path::Path;

use csvseek_core::{ByteStream, IndexedLineStream, Options};

use crate::error::Result;

use super::{open_existing, open_or_create};

pub fn append(file: &Path, options: &Options, values: &[String]) -> Result<()> {
    let mut stream = open_or_create(file, options)?;
    append_impl(&mut stream, values, &mut io::stdout().lock())
}

/// Internal implementation that accepts a stream and writer for testing.
pub(crate) fn append_impl<S: ByteStream>(
    stream: &mut IndexedLineStream<S>,
    values: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let line = stream.append_line(values)?;
    stream.flush()?;
    writeln!(out, "appended line {line}")?;
    Ok(())
}

pub fn insert(file: &Path, options: &Options, line: i64, values: &[String]) -> Result<()> {
    let mut stream = open_existing(file, options)?;
    insert_impl(&mut stream, line, values, &mut io::stdout().lock())
}

pub(crate) fn insert_impl<S: ByteStream>(
    stream: &mut IndexedLineStream<S>,
    line: i64,
    values: &[String],
    out: &mut impl Write,
) -> Result<()> {
    stream.insert_line(line, values)?;
    stream.flush()?;
    writeln!(out, "inserted line {line}")?;
    Ok(())
}

#[cfg(test)]
#[path = "write_tests.rs"]
mod tests;
