// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-addressable access to delimited text on a byte stream.
//!
//! [`IndexedLineStream`] puts a [`PositionedReader`] and a [`PositionedWriter`]
//! over one shared handle and keeps a sparse [`LineIndex`] of every line it has
//! read, written or jumped to. Seeking to a line costs the distance from the
//! nearest indexed line before it; revisiting a line is a single seek.
//!
//! The current position is a pair: the last line consumed (`-1` before the
//! first data line) and the byte offset where the next line starts. Reading
//! yields line `current_line() + 1`.
//!
//! Operations are not synchronized. One caller at a time per instance.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::codec::{LineCodec, RawLine};
use crate::error::{Error, Result};
use crate::index::LineIndex;
use crate::options::Options;
use crate::reader::{PositionedReader, Row};
use crate::source::{ByteStream, SharedStream};
use crate::writer::PositionedWriter;

pub struct IndexedLineStream<S> {
    reader: PositionedReader<SharedStream<S>>,
    writer: PositionedWriter<SharedStream<S>>,
    options: Options,
    column_names: Vec<String>,
    index: LineIndex,
    line: i64,
    position: u64,
}

impl<S: ByteStream> IndexedLineStream<S> {
    /// Wraps `stream` and runs [`initialize`](Self::initialize).
    ///
    /// A seekable stream is addressed from byte 0 regardless of where its
    /// cursor was. In header mode the header is read (or written, for an
    /// empty stream with configured column names) before this returns.
    pub fn new(stream: S, options: Options) -> Result<Self> {
        Self::open(stream, options, true)
    }

    /// Like [`new`](Self::new), but opening never writes. An empty stream in
    /// header mode fails with [`Error::HeaderMissing`] even when column names
    /// are configured.
    pub fn new_read_only(stream: S, options: Options) -> Result<Self> {
        Self::open(stream, options, false)
    }

    fn open(stream: S, options: Options, create_header: bool) -> Result<Self> {
        let shared = SharedStream::new(stream);
        let codec = LineCodec::new(options.delimiter);
        let reader = PositionedReader::new(shared.clone(), codec)?;
        let writer = PositionedWriter::new(shared, codec, options.newline)?;

        let mut stream = IndexedLineStream {
            reader,
            writer,
            options,
            column_names: Vec::new(),
            index: LineIndex::new(),
            line: -1,
            position: 0,
        };
        stream.initialize(create_header)?;
        Ok(stream)
    }

    /// Rewinds and processes the header line. Called once on open.
    fn initialize(&mut self, create_header: bool) -> Result<()> {
        if self.reader.can_seek() {
            self.reader.seek(0)?;
            self.writer.seek(0)?;
        }
        if !self.options.has_header {
            return Ok(());
        }

        match self.reader.next_line()? {
            Some(header) => {
                if let Some(expected) = &self.options.column_names {
                    if !expected.iter().all(|c| header.fields.contains(c)) {
                        return Err(Error::HeaderColumnsMismatch {
                            expected: expected.clone(),
                            actual: header.fields,
                        });
                    }
                }
                self.position = header.byte_len;
                self.column_names = header.fields;
            }
            None => {
                let columns = match &self.options.column_names {
                    Some(columns) if create_header => columns.clone(),
                    _ => return Err(Error::HeaderMissing),
                };
                let written = self.writer.write_header(&columns)?;
                debug!(columns = columns.len(), "wrote header to empty stream");
                self.position = written;
                if self.reader.can_seek() {
                    self.reader.seek(written)?;
                }
                self.column_names = columns;
            }
        }

        self.writer.enforce_columns(Some(self.column_names.len()));
        if self.writer.can_seek() {
            self.writer.seek(self.position)?;
        }
        Ok(())
    }

    /// Column names from the header; empty when header mode is off.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Last line consumed, `-1` before the first data line.
    pub fn current_line(&self) -> i64 {
        self.line
    }

    /// Byte offset where the next line starts.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn index(&self) -> &LineIndex {
        &self.index
    }

    /// Reads the next line and records where it started.
    pub fn read_line(&mut self) -> Result<Row> {
        let offset = self.position;
        match self.reader.next_line()? {
            Some(line) => {
                self.line += 1;
                self.index.insert(self.line, offset);
                self.position += line.byte_len;
                Ok(Row::Found(line.fields))
            }
            None => Ok(Row::EndOfData),
        }
    }

    /// Iterates over the remaining lines from the current position.
    pub fn rows(&mut self) -> Rows<'_, S> {
        Rows { stream: self }
    }

    /// Positions the stream so the next read yields `line`.
    ///
    /// Returns `false` when the data ends before `line`; the stream is then
    /// left at the end of the data.
    pub fn go_to(&mut self, line: i64) -> Result<bool> {
        self.require_seekable()?;
        if line < 0 {
            return Err(Error::LineOutOfBounds { line });
        }
        match self.index.get(line) {
            Some(offset) => {
                trace!(line, offset, "line index hit");
                self.move_to(line, offset)?;
                Ok(true)
            }
            None => self.find_line(line),
        }
    }

    /// Scans forward from the closest indexed line before `target`.
    fn find_line(&mut self, target: i64) -> Result<bool> {
        match self.index.floor_below(target) {
            Some((line, offset)) => {
                trace!(target, from = line, "line index miss, scanning");
                self.move_to(line, offset)?;
            }
            None => {
                trace!(target, "line index empty, scanning from start");
                self.rewind()?;
            }
        }

        loop {
            let offset = self.position;
            if self.read_line()?.is_end() {
                trace!(target, lines = self.line + 1, "line past end of data");
                return Ok(false);
            }
            if self.line == target {
                self.move_to(target, offset)?;
                return Ok(true);
            }
        }
    }

    /// Seeks to the start of the data, skipping the header when configured.
    fn rewind(&mut self) -> Result<()> {
        self.reader.seek(0)?;
        self.writer.seek(0)?;
        self.line = -1;
        self.position = 0;
        if self.options.has_header {
            let header = self.reader.next_line()?.ok_or(Error::HeaderMissing)?;
            self.position = header.byte_len;
            self.writer.seek(self.position)?;
        }
        Ok(())
    }

    /// Moves reader and writer together to the start of `line`.
    fn move_to(&mut self, line: i64, offset: u64) -> Result<()> {
        self.reader.seek(offset)?;
        self.writer.seek(offset)?;
        self.line = line - 1;
        self.position = offset;
        Ok(())
    }

    /// Appends a line after the last line of the data, returning its number.
    ///
    /// Reads from the highest indexed line to the true end first, so the new
    /// line number is exact even when the index is incomplete. A final line
    /// without a terminator gets one before the new line is written.
    pub fn append_line<V: AsRef<str>>(&mut self, values: &[V]) -> Result<i64> {
        self.require_seekable()?;
        self.writer.check_arity(values)?;

        let next = self.index.last_line().map_or(0, |line| line + 1);
        self.go_to(next)?;
        while !self.read_line()?.is_end() {}

        let tail = self.writer.ensure_end_of_stream_newline()?;
        let written = self.writer.write_line(values)?;
        self.writer.flush()?;

        self.line += 1;
        self.index.insert(self.line, tail);
        self.position = tail + written;
        self.reader.seek(self.position)?;
        debug!(line = self.line, offset = tail, "appended line");
        Ok(self.line)
    }

    /// Inserts a line at `line`, moving it and every following line down by
    /// one. The stream is left positioned at the inserted line.
    ///
    /// Every following line is rewritten, so this costs the length of the
    /// data after `line`. `line` must exist; use
    /// [`append_line`](Self::append_line) to add past the end. The new line's
    /// arity is checked before anything is rewritten.
    pub fn insert_line<V: AsRef<str>>(&mut self, line: i64, values: &[V]) -> Result<()> {
        self.require_seekable()?;
        self.writer.check_arity(values)?;
        if !self.go_to(line)? {
            return Err(Error::LineOutOfBounds { line });
        }

        self.index.discard_from(line);
        let mut read_pos = self.position;
        let mut write_pos = self.position;
        let mut pending: VecDeque<RawLine> =
            VecDeque::from([values.iter().map(|v| v.as_ref().to_string()).collect()]);
        let mut eof = false;

        loop {
            // Never overwrite bytes that have not been read yet.
            while !eof {
                let covered = pending
                    .front()
                    .is_some_and(|front| read_pos >= write_pos + self.writer.line_len(front));
                if covered {
                    break;
                }
                match self.reader.next_line()? {
                    Some(next) => {
                        read_pos += next.byte_len;
                        pending.push_back(next.fields);
                    }
                    None => eof = true,
                }
            }

            let Some(current) = pending.pop_front() else {
                break;
            };
            let written = self.writer.write_line_verbatim(&current)?;
            self.line += 1;
            self.index.insert(self.line, write_pos);
            write_pos += written;
        }

        if write_pos < read_pos {
            self.writer.truncate()?;
        }
        self.writer.flush()?;
        self.position = write_pos;
        debug!(line, shifted = self.line - line, "inserted line");

        self.go_to(line)?;
        Ok(())
    }

    /// Number of data lines, reading past the highest indexed line to the end.
    pub fn line_count(&mut self) -> Result<u64> {
        let next = self.index.last_line().map_or(0, |line| line + 1);
        self.go_to(next)?;
        while !self.read_line()?.is_end() {}
        Ok((self.line + 1) as u64)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }

    /// Flushes and hands back the underlying stream.
    pub fn into_inner(self) -> Result<S> {
        let mut writer = self.writer;
        writer.flush()?;
        drop(self.reader);
        writer
            .into_inner()
            .try_into_inner()
            .map_err(|_| Error::Closed)
    }

    fn require_seekable(&self) -> Result<()> {
        if self.reader.can_seek() && self.writer.can_seek() {
            Ok(())
        } else {
            Err(Error::NotSeekable)
        }
    }
}

/// Iterator over the remaining lines of an [`IndexedLineStream`].
pub struct Rows<'a, S> {
    stream: &'a mut IndexedLineStream<S>,
}

impl<S: ByteStream> Iterator for Rows<'_, S> {
    type Item = Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stream.read_line() {
            Ok(row) => row.into_fields().map(Ok),
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
