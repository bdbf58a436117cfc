// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod read;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod write;

use std::fs::File;
use std::path::Path;

use csvseek_core::{IndexedLineStream, Options, StreamFactory};

use crate::error::{Error, Result};

/// Opens a file that must already exist.
pub(crate) fn open_existing(path: &Path, options: &Options) -> Result<IndexedLineStream<File>> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    open_or_create(path, options)
}

/// Opens a file that must already exist, without ever writing to it.
pub(crate) fn open_read_only(path: &Path, options: &Options) -> Result<IndexedLineStream<File>> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let stream = StreamFactory::new(options.clone()).from_file_read_only(path)?;
    Ok(stream)
}

/// Opens a file, creating it when missing.
pub(crate) fn open_or_create(path: &Path, options: &Options) -> Result<IndexedLineStream<File>> {
    let stream = StreamFactory::new(options.clone()).from_file(path)?;
    Ok(stream)
}
