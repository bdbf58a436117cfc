// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte streams the indexed stream can sit on.
//!
//! Seekability is queried through [`ByteStream::can_seek`] rather than encoded
//! in the type, so a forward-only stream can still be read and written
//! sequentially while line-addressed operations report `NotSeekable`.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// A readable, writable byte stream that may support seeking.
pub trait ByteStream: Read + Write {
    /// Whether [`seek_to`](Self::seek_to) and [`set_len`](Self::set_len) work.
    fn can_seek(&self) -> bool;

    /// Moves the cursor, returning the new absolute offset.
    fn seek_to(&mut self, pos: SeekFrom) -> io::Result<u64>;

    /// Truncates or extends the stream to `len` bytes.
    fn set_len(&mut self, len: u64) -> io::Result<()>;
}

impl ByteStream for File {
    fn can_seek(&self) -> bool {
        true
    }

    fn seek_to(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Seek::seek(self, pos)
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        File::set_len(self, len)
    }
}

impl ByteStream for Cursor<Vec<u8>> {
    fn can_seek(&self) -> bool {
        true
    }

    fn seek_to(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Seek::seek(self, pos)
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len).map_err(io::Error::other)?;
        self.get_mut().resize(len, 0);
        Ok(())
    }
}

/// Forward-only adapter: reads and writes pass through, seeking is refused.
#[derive(Debug)]
pub struct Unseekable<T>(pub T);

impl<T> Unseekable<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Read> Read for Unseekable<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<T: Write> Write for Unseekable<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<T: Read + Write> ByteStream for Unseekable<T> {
    fn can_seek(&self) -> bool {
        false
    }

    fn seek_to(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "stream is not seekable",
        ))
    }

    fn set_len(&mut self, _len: u64) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "stream is not seekable",
        ))
    }
}

/// One underlying stream shared by a positioned reader and a positioned
/// writer. Each call locks for its own duration only.
#[derive(Debug)]
pub struct SharedStream<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedStream<S> {
    fn clone(&self) -> Self {
        SharedStream {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> SharedStream<S> {
    pub fn new(stream: S) -> Self {
        SharedStream {
            inner: Arc::new(Mutex::new(stream)),
        }
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, S>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::other("shared stream lock poisoned"))
    }

    /// Recovers the stream once every other handle has been dropped.
    ///
    /// Returns the handle unchanged if it is still shared.
    pub fn try_into_inner(self) -> std::result::Result<S, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(|e| e.into_inner())),
            Err(inner) => Err(SharedStream { inner }),
        }
    }
}

impl<S: Read> Read for SharedStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.lock()?.read(buf)
    }
}

impl<S: Write> Write for SharedStream<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

impl<S: ByteStream> ByteStream for SharedStream<S> {
    fn can_seek(&self) -> bool {
        self.lock().map(|s| s.can_seek()).unwrap_or(false)
    }

    fn seek_to(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.lock()?.seek_to(pos)
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        self.lock()?.set_len(len)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
