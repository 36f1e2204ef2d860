use microhttp::config::Config;
use microhttp::http::request::{Method, Request};
use microhttp::http::response::{Response, StatusCode};
use microhttp::server::Server;

fn not_found(_req: &Request) -> anyhow::Result<Response> {
    Ok(Response::status_only(StatusCode::NotFound, "Not found"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let mut server = Server::new(cfg);
    server
        .add_handler(Method::GET, "/messages", not_found)
        .add_handler(Method::POST, "/messages", not_found);

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
