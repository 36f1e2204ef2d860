//! HTTP/1.1 request framing and routing.
//!
//! Every connection carries exactly one request and one response; there is
//! no keep-alive, chunked encoding or pipelining.
//!
//! # Architecture
//!
//! - **`scanner`**: Bounded byte-sequence search used to find line and head terminators
//! - **`parser`**: Splits the request head into request line, header lines and query
//! - **`request`**: HTTP request representation
//! - **`router`**: Exact `(method, path)` handler table with a static-file fallback
//! - **`connection`**: Runs one connection through read, route, write and close
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`static_files`**: Serves the whitelisted files from a root directory
//! - **`mime`**: MIME type detection based on file extensions
//! - **`error`**: Parse and serve error types
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer the head (bounded), parse, read the body
//!        └──────┬──────┘
//!               │ Request parsed          ── parse error → Writing(400)
//!               ▼
//!        ┌──────────────────┐
//!        │     Routing      │ ← Handler, static file, or nothing
//!        └──────┬───────────┘
//!               │ Response ready          ── no route → Writing(404)
//!               ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use microhttp::http::connection::Connection;
//! use microhttp::http::router::Router;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = Arc::new(Router::new());
//!     let listener = TcpListener::bind("127.0.0.1:9999").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = Arc::clone(&router);
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, router).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod scanner;
pub mod static_files;
pub mod writer;
