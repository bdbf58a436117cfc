// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Async facade over [`IndexedLineStream`].
//!
//! Each call moves the stream onto tokio's blocking pool, runs the
//! synchronous operation to completion and moves it back. Cancellation is
//! checked once, before the operation starts; a started operation is never
//! interrupted halfway through a shift.
//!
//! If a call's future is dropped while the operation is in flight, the
//! operation still finishes on the blocking pool but the stream is not
//! returned, and every later call fails with [`Error::Closed`].

use std::io;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::codec::RawLine;
use crate::error::{Error, Result};
use crate::reader::Row;
use crate::source::ByteStream;
use crate::stream::IndexedLineStream;

pub struct AsyncLineStream<S> {
    inner: Option<IndexedLineStream<S>>,
}

impl<S: ByteStream + Send + 'static> AsyncLineStream<S> {
    pub fn new(stream: IndexedLineStream<S>) -> Self {
        AsyncLineStream {
            inner: Some(stream),
        }
    }

    /// False once an in-flight call was abandoned.
    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    pub async fn read_line(&mut self, cancel: &CancellationToken) -> Result<Row> {
        self.run(cancel, |stream| stream.read_line()).await
    }

    pub async fn go_to(&mut self, line: i64, cancel: &CancellationToken) -> Result<bool> {
        self.run(cancel, move |stream| stream.go_to(line)).await
    }

    pub async fn append_line(&mut self, values: RawLine, cancel: &CancellationToken) -> Result<i64> {
        self.run(cancel, move |stream| stream.append_line(&values)).await
    }

    pub async fn insert_line(&mut self, line: i64, values: RawLine, cancel: &CancellationToken) -> Result<()> {
        self.run(cancel, move |stream| stream.insert_line(line, &values))
            .await
    }

    pub async fn line_count(&mut self, cancel: &CancellationToken) -> Result<u64> {
        self.run(cancel, |stream| stream.line_count()).await
    }

    pub async fn flush(&mut self, cancel: &CancellationToken) -> Result<()> {
        self.run(cancel, |stream| stream.flush()).await
    }

    /// Hands back the synchronous stream.
    pub fn into_inner(self) -> Result<IndexedLineStream<S>> {
        self.inner.ok_or(Error::Closed)
    }

    async fn run<T, F>(&mut self, cancel: &CancellationToken, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut IndexedLineStream<S>) -> Result<T> + Send + 'static,
    {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let mut stream = self.inner.take().ok_or(Error::Closed)?;

        let joined = tokio::task::spawn_blocking(move || {
            let result = op(&mut stream);
            (stream, result)
        })
        .await;

        match joined {
            Ok((stream, result)) => {
                self.inner = Some(stream);
                result
            }
            Err(e) => {
                warn!(error = %e, "stream operation did not complete, closing");
                Err(Error::Io(io::Error::other(e)))
            }
        }
    }
}

impl<S: ByteStream + Send + 'static> From<IndexedLineStream<S>> for AsyncLineStream<S> {
    fn from(stream: IndexedLineStream<S>) -> Self {
        AsyncLineStream::new(stream)
    }
}

#[cfg(test)]
#[path = "async_stream_tests.rs"]
mod tests;
