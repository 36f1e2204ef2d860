//! Route table keyed by exact `(method, path)`.
//!
//! The table is filled before serving starts and only read afterwards, so it
//! is shared between connections as `Arc<Router>` without locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::static_files::StaticFiles;

/// A registered request handler.
///
/// The returned response is written to the client as-is. An error closes the
/// connection without writing anything.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &Request) -> anyhow::Result<Response>;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> anyhow::Result<Response> + Send + Sync,
{
    fn handle(&self, request: &Request) -> anyhow::Result<Response> {
        self(request)
    }
}

/// Outcome of matching a request against the table.
#[derive(Clone)]
pub enum Route {
    Matched(Arc<dyn Handler>),
    StaticFallback(String),
    NoRoute,
}

impl Route {
    pub fn kind(&self) -> &'static str {
        match self {
            Route::Matched(_) => "handler",
            Route::StaticFallback(_) => "static",
            Route::NoRoute => "none",
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Matched(_) => f.write_str("Matched(..)"),
            Route::StaticFallback(path) => f.debug_tuple("StaticFallback").field(path).finish(),
            Route::NoRoute => f.write_str("NoRoute"),
        }
    }
}

#[derive(Default)]
pub struct Router {
    routes: HashMap<Method, HashMap<String, Arc<dyn Handler>>>,
    static_files: Option<Arc<StaticFiles>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router whose misses fall back to the given static file whitelist.
    pub fn with_static_files(static_files: Arc<StaticFiles>) -> Self {
        Self {
            routes: HashMap::new(),
            static_files: Some(static_files),
        }
    }

    /// Registers a closure for `(method, path)`, replacing any earlier handler.
    pub fn register<F>(&mut self, method: Method, path: impl Into<String>, handler: F)
    where
        F: Fn(&Request) -> anyhow::Result<Response> + Send + Sync + 'static,
    {
        self.register_handler(method, path, handler);
    }

    /// Registers any [`Handler`] implementation for `(method, path)`.
    pub fn register_handler<H>(&mut self, method: Method, path: impl Into<String>, handler: H)
    where
        H: Handler + 'static,
    {
        let path = path.into();
        tracing::debug!(method = %method, path = %path, "Registering handler");

        self.routes
            .entry(method)
            .or_default()
            .insert(path, Arc::new(handler));
    }

    /// Matches a request.
    ///
    /// An exact handler match wins. Otherwise a GET for a whitelisted static
    /// path falls back to the file server, and everything else is `NoRoute`,
    /// whether or not the method has any handlers at all.
    pub fn dispatch(&self, request: &Request) -> Route {
        if let Some(handler) = self
            .routes
            .get(&request.method)
            .and_then(|paths| paths.get(&request.path))
        {
            return Route::Matched(Arc::clone(handler));
        }

        match &self.static_files {
            Some(files) if request.method == Method::GET && files.is_whitelisted(&request.path) => {
                Route::StaticFallback(request.path.clone())
            }
            _ => Route::NoRoute,
        }
    }

    pub fn static_files(&self) -> Option<&Arc<StaticFiles>> {
        self.static_files.as_ref()
    }

    pub fn route_count(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }
}
