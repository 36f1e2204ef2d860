//! Startup: handler registration and the accept loop.

pub mod listener;

use std::sync::Arc;

use crate::config::Config;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::router::Router;
use crate::http::static_files::StaticFiles;

/// Collects handlers, then serves them.
///
/// Registration happens on `&mut self` before [`Server::run`] takes the
/// server by value, so the route table is frozen once connections arrive.
pub struct Server {
    config: Config,
    router: Router,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let static_files = Arc::new(StaticFiles::from_config(&config.static_files));
        Self {
            router: Router::with_static_files(static_files),
            config,
        }
    }

    pub fn add_handler<F>(&mut self, method: Method, path: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&Request) -> anyhow::Result<Response> + Send + Sync + 'static,
    {
        self.router.register(method, path, handler);
        self
    }

    /// Freezes the route table and shares it between connections.
    pub fn into_router(self) -> Arc<Router> {
        Arc::new(self.router)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let server_cfg = self.config.server.clone();
        listener::run(&server_cfg, self.into_router()).await
    }
}
