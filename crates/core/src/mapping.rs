// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed records on top of [`IndexedLineStream`].
//!
//! A [`Mapping`] converts between a record type and the raw fields of one
//! line. Converter mappings see fields by position. Header mappings see them
//! by column name and put the stream in header mode with their columns.
//! [`Mapping::serde`] builds a header mapping from a struct's serde derives.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::RawLine;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::reader::Row;
use crate::source::ByteStream;
use crate::stream::IndexedLineStream;
use crate::typed;

/// Values of one line keyed by column name.
pub type ColumnValues = HashMap<String, String>;

type ToFields<T> = Box<dyn Fn(&T) -> RawLine + Send + Sync>;
type FromFields<T> = Box<dyn Fn(RawLine) -> Result<T> + Send + Sync>;
type Produce<T> = Box<dyn Fn(&ColumnValues) -> Result<T> + Send + Sync>;
type Consume<T> = Box<dyn Fn(&T) -> Result<ColumnValues> + Send + Sync>;

pub enum Mapping<T> {
    /// Positional conversion in both directions.
    Converter {
        to_fields: ToFields<T>,
        from_fields: FromFields<T>,
    },
    /// Conversion by column name.
    Header {
        columns: Vec<String>,
        produce: Produce<T>,
        consume: Consume<T>,
    },
}

impl<T> Mapping<T> {
    pub fn converter<F, G>(to_fields: F, from_fields: G) -> Self
    where
        F: Fn(&T) -> RawLine + Send + Sync + 'static,
        G: Fn(RawLine) -> Result<T> + Send + Sync + 'static,
    {
        Mapping::Converter {
            to_fields: Box::new(to_fields),
            from_fields: Box::new(from_fields),
        }
    }

    pub fn header<I, C, P, Q>(columns: I, produce: P, consume: Q) -> Self
    where
        T: 'static,
        I: IntoIterator<Item = C>,
        C: Into<String>,
        P: Fn(&ColumnValues) -> Result<T> + Send + Sync + 'static,
        Q: Fn(&T) -> ColumnValues + Send + Sync + 'static,
    {
        Mapping::Header {
            columns: columns.into_iter().map(Into::into).collect(),
            produce: Box::new(produce),
            consume: Box::new(move |record: &T| Ok(consume(record))),
        }
    }

    /// Columns a header mapping requires; `None` for converters.
    pub fn columns(&self) -> Option<&[String]> {
        match self {
            Mapping::Converter { .. } => None,
            Mapping::Header { columns, .. } => Some(columns),
        }
    }

    /// Adjusts `options` so the stream matches this mapping.
    fn apply(&self, mut options: Options) -> Options {
        if let Mapping::Header { columns, .. } = self {
            options.has_header = true;
            options.column_names = Some(columns.clone());
        }
        options
    }

    fn decode(&self, header: &[String], fields: RawLine) -> Result<T> {
        match self {
            Mapping::Converter { from_fields, .. } => from_fields(fields),
            Mapping::Header { produce, .. } => {
                let values: ColumnValues = header.iter().cloned().zip(fields).collect();
                produce(&values)
            }
        }
    }

    fn encode(&self, header: &[String], record: &T) -> Result<RawLine> {
        match self {
            Mapping::Converter { to_fields, .. } => Ok(to_fields(record)),
            Mapping::Header { consume, .. } => {
                let mut values = consume(record)?;
                Ok(header
                    .iter()
                    .map(|column| values.remove(column).unwrap_or_default())
                    .collect())
            }
        }
    }
}

impl<T: Serialize + DeserializeOwned + 'static> Mapping<T> {
    /// Header mapping derived from `T`'s serde implementation.
    ///
    /// `T` must be a struct with named fields. Its serialized field names are
    /// the required columns, so `#[serde(rename = "...")]` maps a field to a
    /// differently named column. Values are parsed by field type; an empty
    /// value reads as `None` for `Option` fields and `None` writes as empty.
    pub fn serde() -> Result<Self> {
        Ok(Mapping::Header {
            columns: typed::column_names::<T>()?,
            produce: Box::new(typed::from_columns::<T>),
            consume: Box::new(typed::to_columns::<T>),
        })
    }
}

/// Parses the value of `column` from a header-mapped line.
pub fn field<T>(values: &ColumnValues, column: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = values
        .get(column)
        .ok_or_else(|| Error::MissingColumn(column.to_string()))?;
    raw.parse()
        .map_err(|e| Error::Mapping(format!("column {column}: {e}")))
}

/// An [`IndexedLineStream`] that reads and writes records of type `T`.
pub struct RecordStream<T, S> {
    stream: IndexedLineStream<S>,
    mapping: Mapping<T>,
}

impl<T, S: ByteStream> RecordStream<T, S> {
    pub fn new(stream: S, mapping: Mapping<T>, options: Options) -> Result<Self> {
        let options = mapping.apply(options);
        let stream = IndexedLineStream::new(stream, options)?;
        Ok(RecordStream { stream, mapping })
    }

    pub fn read_record(&mut self) -> Result<Option<T>> {
        match self.stream.read_line()? {
            Row::Found(fields) => self
                .mapping
                .decode(self.stream.column_names(), fields)
                .map(Some),
            Row::EndOfData => Ok(None),
        }
    }

    pub fn go_to(&mut self, line: i64) -> Result<bool> {
        self.stream.go_to(line)
    }

    pub fn append_record(&mut self, record: &T) -> Result<i64> {
        let fields = self.mapping.encode(self.stream.column_names(), record)?;
        self.stream.append_line(&fields)
    }

    pub fn insert_record(&mut self, line: i64, record: &T) -> Result<()> {
        let fields = self.mapping.encode(self.stream.column_names(), record)?;
        self.stream.insert_line(line, &fields)
    }

    pub fn stream(&self) -> &IndexedLineStream<S> {
        &self.stream
    }

    pub fn stream_mut(&mut self) -> &mut IndexedLineStream<S> {
        &mut self.stream
    }

    pub fn into_inner(self) -> IndexedLineStream<S> {
        self.stream
    }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
