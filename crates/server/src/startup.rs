use std::{future::Future, net::SocketAddr};

use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

/// Resolve the configured `host:port` into a socket address
pub fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    let raw = server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address {raw:?}: {e}")))
}

/// Public entry: build the app and serve until `shutdown` resolves
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::seeded();
    let app = routes::build_router(state, routes::build_cors());

    let addr = bind_addr(&cfg.server)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, "cats server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("cats server stopped");
    Ok(())
}

/// Serve until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}
