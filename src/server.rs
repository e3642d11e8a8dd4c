//! Liveness endpoint for hosting platforms that probe `GET /`.

use axum::{routing::get, Router};
use rekap_core::config::ServerConfig;

pub const ALIVE: &str = "Bot is running!";

pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    ALIVE
}

/// Bind to `cfg.host:cfg.port` and serve until the process is stopped.
pub async fn serve(cfg: &ServerConfig) -> anyhow::Result<()> {
    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "liveness server listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
