// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opens indexed line streams over files, in-memory buffers or any other
//! [`ByteStream`] with one set of options.

use std::fs::{File, OpenOptions};
use std::io::Cursor;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::mapping::{Mapping, RecordStream};
use crate::options::Options;
use crate::source::ByteStream;
use crate::stream::IndexedLineStream;

#[derive(Debug, Clone, Default)]
pub struct StreamFactory {
    options: Options,
}

#[allow(clippy::wrong_self_convention)]
impl StreamFactory {
    pub fn new(options: Options) -> Self {
        StreamFactory { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Opens `path` for reading and writing, creating it if missing.
    pub fn from_file(&self, path: impl AsRef<Path>) -> Result<IndexedLineStream<File>> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        debug!(path = %path.display(), "opened file stream");
        self.from_stream(file)
    }

    /// Opens an existing `path` for reading only. The file is never written,
    /// so an empty file in header mode fails with [`Error::HeaderMissing`].
    ///
    /// [`Error::HeaderMissing`]: crate::error::Error::HeaderMissing
    pub fn from_file_read_only(&self, path: impl AsRef<Path>) -> Result<IndexedLineStream<File>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "opened read-only file stream");
        IndexedLineStream::new_read_only(file, self.options.clone())
    }

    pub fn from_stream<S: ByteStream>(&self, stream: S) -> Result<IndexedLineStream<S>> {
        IndexedLineStream::new(stream, self.options.clone())
    }

    /// In-memory stream over `bytes`; recover them with `into_inner`.
    pub fn from_bytes(&self, bytes: Vec<u8>) -> Result<IndexedLineStream<Cursor<Vec<u8>>>> {
        self.from_stream(Cursor::new(bytes))
    }

    /// Record stream over `stream` using this factory's options.
    pub fn records<T, S: ByteStream>(&self, stream: S, mapping: Mapping<T>) -> Result<RecordStream<T, S>> {
        RecordStream::new(stream, mapping, self.options.clone())
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
