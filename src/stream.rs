//! Live audio stream returned by the streaming synthesis call.

use crate::{BoxStream, Error, ErrorContext, Result};
use bytes::{Bytes, BytesMut};
use futures::stream::FusedStream;
use futures::{Stream, StreamExt, TryStreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;
use tracing::debug;

/// Sequential, single-pass handle over a synthesis response body.
///
/// Chunks arrive as the remote service produces them. The stream ends when the
/// remote side closes the response, or after the first error; it cannot be
/// restarted. Dropping the handle (or calling [`AudioStream::close`]) releases
/// the underlying connection, including when iteration stops early.
pub struct AudioStream {
    inner: BoxStream<'static, Bytes>,
    content_type: Option<String>,
    finished: bool,
}

impl AudioStream {
    pub(crate) fn from_response(operation: &'static str, response: reqwest::Response) -> Self {
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let inner = response.bytes_stream().map_err(move |e| {
            Error::request_failed(
                format!("{} failed while streaming: {}", operation, e),
                ErrorContext::new().with_source(operation),
                e,
            )
        });
        Self::new(Box::pin(inner), content_type)
    }

    /// Wrap any chunk stream, e.g. to feed recorded audio through code that expects a live handle.
    pub fn new(inner: BoxStream<'static, Bytes>, content_type: Option<String>) -> Self {
        Self {
            inner,
            content_type,
            finished: false,
        }
    }

    /// `Content-Type` reported by the remote service, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Drain the remaining chunks into one buffer, in arrival order.
    pub async fn collect_bytes(mut self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }

    /// Adapt the handle into a tokio [`AsyncRead`], e.g. for `tokio::io::copy` into a file.
    pub fn into_async_read(self) -> impl AsyncRead + Send + Unpin {
        StreamReader::new(
            self.map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e)),
        )
    }

    /// Release the connection without reading the rest of the body.
    pub fn close(self) {
        debug!(finished = self.finished, "closing audio stream");
        drop(self);
    }
}

impl Stream for AudioStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.finished {
            return Poll::Ready(None);
        }
        match self.inner.as_mut().poll_next(cx) {
            Poll::Ready(None) => {
                self.finished = true;
                Poll::Ready(None)
            }
            Poll::Ready(Some(Err(e))) => {
                self.finished = true;
                Poll::Ready(Some(Err(e)))
            }
            other => other,
        }
    }
}

impl FusedStream for AudioStream {
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioStream")
            .field("content_type", &self.content_type)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
