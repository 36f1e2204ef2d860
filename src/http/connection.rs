use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::error::ServeError;
use crate::http::parser::{self, HEADERS_DELIMITER};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::{Route, Router};
use crate::http::scanner;
use crate::http::writer::ResponseWriter;

/// Default upper bound for the request head.
pub const DEFAULT_READ_LIMIT: usize = 4096;

const READ_CHUNK: usize = 1024;

/// Serves exactly one request on a stream, then closes it.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    read_limit: usize,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Routing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(DEFAULT_READ_LIMIT),
            read_limit: DEFAULT_READ_LIMIT,
            router,
            state: ConnectionState::Reading,
        }
    }

    pub fn with_read_limit(mut self, read_limit: usize) -> Self {
        self.read_limit = read_limit;
        self
    }

    /// Drives the connection from reading to close.
    ///
    /// Framing errors and routing misses are answered with an empty 400/404.
    /// Handler and I/O failures are returned after dropping the stream, with
    /// nothing written for them.
    pub async fn run(mut self) -> Result<(), ServeError> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(Some(req)) => ConnectionState::Routing(req),
                    Ok(None) => ConnectionState::Closed,
                    Err(e) => Self::respond_to_error(e)?,
                },

                ConnectionState::Routing(req) => match self.route(&req).await {
                    Ok(response) => {
                        tracing::info!(
                            method = %req.method,
                            path = %req.path,
                            status = response.status.as_u16(),
                            "Request handled"
                        );
                        ConnectionState::Writing(ResponseWriter::new(&response))
                    }
                    Err(e) => Self::respond_to_error(e)?,
                },

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        self.stream.shutdown().await?;
        Ok(())
    }

    /// Reads and parses one request. `None` means the peer closed before
    /// sending anything.
    pub async fn read_request(&mut self) -> Result<Option<Request>, ServeError> {
        let read = self.fill_head().await?;
        if read == 0 {
            return Ok(None);
        }

        let head = parser::parse_head(&self.buffer[..read])?;

        let body = match head.content_length {
            Some(len) => self.read_body(head.body_start, len).await?,
            None => Vec::new(),
        };

        Ok(Some(head.into_request(body)))
    }

    /// Buffers input until the head terminator shows up, the read limit is
    /// reached, or the peer stops sending. Returns the number of bytes held.
    async fn fill_head(&mut self) -> std::io::Result<usize> {
        let mut temp = [0u8; READ_CHUNK];
        let mut scanned = 0;

        loop {
            let len = self.buffer.len();

            if scanner::find(&self.buffer, HEADERS_DELIMITER, scanned, len).is_some() {
                break;
            }
            if len >= self.read_limit {
                tracing::debug!(limit = self.read_limit, "Request head hit read limit");
                break;
            }
            // A terminator may straddle the next read.
            scanned = len.saturating_sub(HEADERS_DELIMITER.len() - 1);

            let want = READ_CHUNK.min(self.read_limit - len);
            let n = self.stream.read(&mut temp[..want]).await?;

            if n == 0 {
                break;
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }

        Ok(self.buffer.len())
    }

    /// Collects `len` body bytes: first whatever already sits in the buffer
    /// after the head, then the rest straight from the stream.
    async fn read_body(&mut self, body_start: usize, len: usize) -> std::io::Result<Vec<u8>> {
        let buffered = &self.buffer[body_start.min(self.buffer.len())..];
        let mut body = buffered[..buffered.len().min(len)].to_vec();

        let remaining = len - body.len();
        if remaining > 0 {
            let got = (&mut self.stream)
                .take(remaining as u64)
                .read_to_end(&mut body)
                .await?;

            if got < remaining {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("body ended after {} of {} bytes", body.len(), len),
                ));
            }
        }

        Ok(body)
    }

    async fn route(&self, req: &Request) -> Result<Response, ServeError> {
        let no_route = || ServeError::NoRoute {
            method: req.method.to_string(),
            path: req.path.clone(),
        };

        match self.router.dispatch(req) {
            Route::Matched(handler) => handler.handle(req).map_err(ServeError::Handler),

            Route::StaticFallback(path) => {
                let files = self.router.static_files().ok_or_else(no_route)?;
                if !files.exists(&path).await {
                    tracing::debug!(path = %path, "Whitelisted file missing on disk");
                    return Err(no_route());
                }
                Ok(files.respond(&path).await?)
            }

            Route::NoRoute => Err(no_route()),
        }
    }

    fn respond_to_error(e: ServeError) -> Result<ConnectionState, ServeError> {
        match e.status() {
            Some(status) => {
                tracing::warn!(status = status.as_u16(), error = %e, "Rejecting request");
                let response = Response::empty(status);
                Ok(ConnectionState::Writing(ResponseWriter::new(&response)))
            }
            None => Err(e),
        }
    }
}
