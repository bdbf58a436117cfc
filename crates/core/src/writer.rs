// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line writer with seek-to-offset and end-of-stream newline normalization.
//!
//! The writer keeps its own write offset and moves the underlying cursor there
//! before every write, so it can share a handle with a [`PositionedReader`].
//! Nothing is buffered between calls.
//!
//! [`PositionedReader`]: crate::reader::PositionedReader

use std::io::SeekFrom;

use crate::codec::LineCodec;
use crate::error::{Error, Result};
use crate::options::NewLine;
use crate::source::ByteStream;

pub struct PositionedWriter<W> {
    handle: W,
    codec: LineCodec,
    newline: NewLine,
    seekable: bool,
    /// Column count every checked write must match (header mode).
    columns: Option<usize>,
    offset: u64,
}

impl<W: ByteStream> PositionedWriter<W> {
    /// Wraps `handle`, starting at its current cursor.
    pub fn new(mut handle: W, codec: LineCodec, newline: NewLine) -> Result<Self> {
        let seekable = handle.can_seek();
        let offset = if seekable {
            handle.seek_to(SeekFrom::Current(0))?
        } else {
            0
        };
        Ok(PositionedWriter {
            handle,
            codec,
            newline,
            seekable,
            columns: None,
            offset,
        })
    }

    pub fn can_seek(&self) -> bool {
        self.seekable
    }

    pub fn newline(&self) -> NewLine {
        self.newline
    }

    /// Offset the next write lands on.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Sets the column count that [`write_line`](Self::write_line) enforces.
    pub fn enforce_columns(&mut self, columns: Option<usize>) {
        self.columns = columns;
    }

    pub fn check_arity<V: AsRef<str>>(&self, values: &[V]) -> Result<()> {
        match self.columns {
            Some(expected) if expected != values.len() => Err(Error::ColumnCountMismatch {
                expected,
                actual: values.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Bytes a written line occupies, terminator included.
    pub fn line_len<V: AsRef<str>>(&self, values: &[V]) -> u64 {
        self.codec.encoded_len(values) + self.newline.byte_len()
    }

    pub fn seek(&mut self, offset: u64) -> Result<()> {
        if !self.seekable {
            return Err(Error::NotSeekable);
        }
        self.offset = offset;
        Ok(())
    }

    /// Writes one line after checking its arity. Returns the bytes written.
    pub fn write_line<V: AsRef<str>>(&mut self, values: &[V]) -> Result<u64> {
        self.check_arity(values)?;
        self.write_line_verbatim(values)
    }

    /// Writes one line without the arity check.
    ///
    /// Used to move existing lines, which are rewritten exactly as read.
    pub fn write_line_verbatim<V: AsRef<str>>(&mut self, values: &[V]) -> Result<u64> {
        let mut line = self.codec.join(values);
        line.push_str(self.newline.as_str());
        self.write_bytes(line.as_bytes())
    }

    /// Writes the header line and flushes it.
    pub fn write_header<V: AsRef<str>>(&mut self, columns: &[V]) -> Result<u64> {
        let written = self.write_line_verbatim(columns)?;
        self.flush()?;
        Ok(written)
    }

    /// Makes sure non-empty content ends with a line break and returns the
    /// resulting end-of-stream offset, where the next line must start.
    ///
    /// Any trailing `\n` counts as a line break, so content written with `\n`
    /// is not given an extra `\r\n` when the writer uses CRLF.
    pub fn ensure_end_of_stream_newline(&mut self) -> Result<u64> {
        if !self.seekable {
            return Err(Error::NotSeekable);
        }
        self.handle.flush()?;

        let end = self.handle.seek_to(SeekFrom::End(0))?;
        self.offset = end;
        if end == 0 {
            return Ok(end);
        }

        self.handle.seek_to(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        self.handle.read_exact(&mut last)?;
        if last[0] != b'\n' {
            tracing::trace!(end, "terminating final line");
            self.write_bytes(self.newline.as_bytes())?;
            self.handle.flush()?;
        }
        Ok(self.offset)
    }

    /// Cuts the stream off at the current write offset.
    pub fn truncate(&mut self) -> Result<()> {
        if !self.seekable {
            return Err(Error::NotSeekable);
        }
        self.handle.set_len(self.offset)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.handle.flush()?;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<u64> {
        if self.seekable {
            self.handle.seek_to(SeekFrom::Start(self.offset))?;
        }
        self.handle.write_all(bytes)?;
        let written = bytes.len() as u64;
        self.offset += written;
        Ok(written)
    }

    pub fn into_inner(self) -> W {
        self.handle
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
