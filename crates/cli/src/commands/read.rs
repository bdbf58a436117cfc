// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that only read: `read`, `get`, `count` and `header`.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use csvseek_core::{ByteStream, IndexedLineStream, LineCodec, Options, Row};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::open_read_only;

#[derive(Serialize)]
struct LineOutput<'a> {
    line: i64,
    fields: &'a [String],
}

pub fn run(file: &Path, options: &Options, from: i64, limit: Option<usize>, format: OutputFormat) -> Result<()> {
    let mut stream = open_read_only(file, options)?;
    run_impl(&mut stream, from, limit, format, &mut io::stdout().lock())
}

/// Internal implementation that accepts a stream and writer for testing.
pub(crate) fn run_impl<S: ByteStream>(
    stream: &mut IndexedLineStream<S>,
    from: i64,
    limit: Option<usize>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut lines = Vec::new();
    if stream.go_to(from)? {
        while limit.is_none_or(|limit| lines.len() < limit) {
            match stream.read_line()? {
                Row::Found(fields) => lines.push((stream.current_line(), fields)),
                Row::EndOfData => break,
            }
        }
    }
    tracing::debug!(from, printed = lines.len(), "read lines");

    match format {
        OutputFormat::Text => {
            let codec = LineCodec::new(stream.options().delimiter);
            for (_, fields) in &lines {
                writeln!(out, "{}", codec.join(fields))?;
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = lines
                .iter()
                .map(|(line, fields)| LineOutput { line: *line, fields })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

pub fn get(file: &Path, options: &Options, line: i64, format: OutputFormat) -> Result<()> {
    let mut stream = open_read_only(file, options)?;
    get_impl(&mut stream, line, format, &mut io::stdout().lock())
}

pub(crate) fn get_impl<S: ByteStream>(
    stream: &mut IndexedLineStream<S>,
    line: i64,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let fields = if stream.go_to(line)? {
        stream.read_line()?.into_fields()
    } else {
        None
    };
    let Some(fields) = fields else {
        let count = stream.line_count()?;
        return Err(Error::LineNotFound { line, count });
    };

    match format {
        OutputFormat::Text => {
            let codec = LineCodec::new(stream.options().delimiter);
            writeln!(out, "{}", codec.join(&fields))?;
        }
        OutputFormat::Json => {
            let output = LineOutput { line, fields: &fields };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

pub fn count(file: &Path, options: &Options) -> Result<()> {
    let mut stream = open_read_only(file, options)?;
    count_impl(&mut stream, &mut io::stdout().lock())
}

pub(crate) fn count_impl<S: ByteStream>(stream: &mut IndexedLineStream<S>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", stream.line_count()?)?;
    Ok(())
}

/// Prints the header line. The file is always opened in header mode.
pub fn header(file: &Path, options: &Options, format: OutputFormat) -> Result<()> {
    let options = Options {
        has_header: true,
        ..options.clone()
    };
    let stream = open_read_only(file, &options)?;
    header_impl(&stream, format, &mut io::stdout().lock())
}

pub(crate) fn header_impl<S: ByteStream>(
    stream: &IndexedLineStream<S>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let columns = stream.column_names();
    match format {
        OutputFormat::Text => {
            for column in columns {
                writeln!(out, "{column}")?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(columns)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "read_tests.rs"]
mod tests;
