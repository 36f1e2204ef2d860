use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::ServerConfig;
use crate::http::connection::Connection;
use crate::http::router::Router;

/// Accept loop. At most `workers` connections are served at once; while all
/// permits are taken no further connection is accepted.
pub async fn run(cfg: &ServerConfig, router: Arc<Router>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!(
        addr = %cfg.listen_addr,
        workers = cfg.workers,
        routes = router.route_count(),
        "Listening"
    );

    serve(listener, cfg, router).await
}

/// Runs the accept loop on an already bound listener.
pub async fn serve(
    listener: TcpListener,
    cfg: &ServerConfig,
    router: Arc<Router>,
) -> anyhow::Result<()> {
    let workers = Arc::new(Semaphore::new(cfg.workers));

    loop {
        let permit = Arc::clone(&workers).acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        info!(%peer, "Accepted connection");

        let router = Arc::clone(&router);
        let read_limit = cfg.read_limit;
        tokio::spawn(async move {
            let _permit = permit;
            let conn = Connection::new(socket, router).with_read_limit(read_limit);
            if let Err(e) = conn.run().await {
                tracing::error!(%peer, error = %e, "Connection error");
            }
        });
    }
}
