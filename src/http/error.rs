//! Error taxonomy for one connection.
//!
//! Parse errors and routing misses are answered with an empty-bodied status
//! response; handler and I/O failures close the connection without one.

use crate::http::response::StatusCode;

/// Framing failures detected while parsing the request head.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request line")]
    MalformedRequestLine,

    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("malformed path: {0}")]
    MalformedPath(String),

    #[error("header block terminator not found")]
    MalformedHeaders,

    #[error("invalid Content-Length: {0:?}")]
    InvalidContentLength(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no route for {method} {path}")]
    NoRoute { method: String, path: String },

    #[error("handler failed: {0}")]
    Handler(anyhow::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServeError {
    /// Status to answer with, or `None` when the connection must just be dropped.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ServeError::Parse(_) => Some(StatusCode::BadRequest),
            ServeError::NoRoute { .. } => Some(StatusCode::NotFound),
            ServeError::Handler(_) | ServeError::Io(_) => None,
        }
    }
}
