//! microhttp - minimal single-request-per-connection HTTP/1.1 server
//!
//! Request framing, exact-match routing and whitelisted static files.

pub mod config;
pub mod http;
pub mod server;
