// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! csvseek-core: line-addressable delimited text streams
//!
//! This crate provides the indexed line stream and the pieces it is built
//! from: a positioned reader and writer sharing one byte stream, and a sparse
//! line-number to byte-offset index. Typed record mapping, a stream factory
//! and an async facade sit on top.

#[cfg(feature = "async")]
pub mod async_stream;
pub mod codec;
pub mod error;
pub mod factory;
pub mod index;
pub mod mapping;
pub mod options;
pub mod reader;
pub mod source;
pub mod stream;
mod typed;
pub mod writer;

#[cfg(feature = "async")]
pub use async_stream::AsyncLineStream;
pub use codec::{LineCodec, RawLine};
pub use error::{Error, Result};
pub use factory::StreamFactory;
pub use index::LineIndex;
pub use mapping::{field, ColumnValues, Mapping, RecordStream};
pub use options::{NewLine, Options};
pub use reader::{PhysicalLine, PositionedReader, Row};
pub use source::{ByteStream, SharedStream, Unseekable};
pub use stream::{IndexedLineStream, Rows};
pub use writer::PositionedWriter;
