// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Forward-only line reader with seek-to-offset.
//!
//! The reader knows nothing about line numbers. It hands out one physical
//! line at a time together with the number of bytes that line occupied, and
//! can jump to an arbitrary byte offset when the stream allows it.
//!
//! Reads are buffered. Before every refill the reader moves the underlying
//! cursor back to where its buffer ends, so a writer sharing the same handle
//! may move the cursor freely between reads.

use std::io::{self, SeekFrom};

use crate::codec::{LineCodec, RawLine};
use crate::error::{Error, Result};
use crate::source::ByteStream;

const CHUNK_SIZE: usize = 8 * 1024;

/// Outcome of reading one line: its fields, or the end of the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Found(RawLine),
    EndOfData,
}

impl Row {
    pub fn into_fields(self) -> Option<RawLine> {
        match self {
            Row::Found(fields) => Some(fields),
            Row::EndOfData => None,
        }
    }

    pub fn fields(&self) -> Option<&[String]> {
        match self {
            Row::Found(fields) => Some(fields),
            Row::EndOfData => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Row::EndOfData)
    }
}

/// One physical line and the bytes it occupied, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalLine {
    pub fields: RawLine,
    pub byte_len: u64,
}

pub struct PositionedReader<R> {
    handle: R,
    codec: LineCodec,
    seekable: bool,
    buf: Vec<u8>,
    consumed: usize,
    /// Absolute offset just past the last buffered byte.
    fill_offset: u64,
}

impl<R: ByteStream> PositionedReader<R> {
    /// Wraps `handle`, starting at its current cursor.
    pub fn new(mut handle: R, codec: LineCodec) -> Result<Self> {
        let seekable = handle.can_seek();
        let fill_offset = if seekable {
            handle.seek_to(SeekFrom::Current(0))?
        } else {
            0
        };
        Ok(PositionedReader {
            handle,
            codec,
            seekable,
            buf: Vec::new(),
            consumed: 0,
            fill_offset,
        })
    }

    pub fn can_seek(&self) -> bool {
        self.seekable
    }

    pub fn codec(&self) -> &LineCodec {
        &self.codec
    }

    /// Offset of the next unread byte.
    pub fn offset(&self) -> u64 {
        self.fill_offset - (self.buf.len() - self.consumed) as u64
    }

    /// Repositions the reader at an absolute byte offset.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        if !self.seekable {
            return Err(Error::NotSeekable);
        }
        self.handle.seek_to(SeekFrom::Start(offset))?;
        self.buf.clear();
        self.consumed = 0;
        self.fill_offset = offset;
        Ok(())
    }

    /// Reads the next line's fields.
    pub fn read_line(&mut self) -> Result<Row> {
        Ok(match self.next_line()? {
            Some(line) => Row::Found(line.fields),
            None => Row::EndOfData,
        })
    }

    /// Consumes exactly one physical line, or returns `None` without
    /// advancing when no data is left.
    ///
    /// Accepts `\n` and `\r\n` terminators; the final line may have none.
    pub fn next_line(&mut self) -> Result<Option<PhysicalLine>> {
        let start = self.offset();
        let mut searched = 0;
        loop {
            let pending = &self.buf[self.consumed..];
            if let Some(i) = pending[searched..].iter().position(|&b| b == b'\n') {
                let end = searched + i;
                return self.take_line(start, end, end + 1).map(Some);
            }
            searched = pending.len();

            if self.fill()? == 0 {
                let rest = self.buf.len() - self.consumed;
                if rest == 0 {
                    return Ok(None);
                }
                return self.take_line(start, rest, rest).map(Some);
            }
        }
    }

    /// Splits off `content_len` bytes of content, consuming `total_len`.
    fn take_line(&mut self, start: u64, content_len: usize, total_len: usize) -> Result<PhysicalLine> {
        let mut content = &self.buf[self.consumed..self.consumed + content_len];
        if let Some(stripped) = content.strip_suffix(b"\r") {
            content = stripped;
        }
        let text = std::str::from_utf8(content).map_err(|_| Error::InvalidEncoding { offset: start })?;
        let fields = self.codec.split(text);
        self.consumed += total_len;
        Ok(PhysicalLine {
            fields,
            byte_len: total_len as u64,
        })
    }

    fn fill(&mut self) -> Result<usize> {
        if self.consumed > 0 {
            self.buf.drain(..self.consumed);
            self.consumed = 0;
        }
        if self.seekable {
            self.handle.seek_to(SeekFrom::Start(self.fill_offset))?;
        }

        let len = self.buf.len();
        self.buf.resize(len + CHUNK_SIZE, 0);
        let read = loop {
            match self.handle.read(&mut self.buf[len..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buf.truncate(len);
                    return Err(e.into());
                }
            }
        };
        self.buf.truncate(len + read);
        self.fill_offset += read as u64;
        Ok(read)
    }

    pub fn into_inner(self) -> R {
        self.handle
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
