use anyhow::Result;
use platter::config::ServerConfig;
use platter::server::{AppState, build_router};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("platter=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::new();
    let app = build_router(state);

    let listener = TcpListener::bind(&config.addr).await?;
    tracing::info!("server listening on {}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
