use std::net::SocketAddr;

use leanpawgress_backend::config::AppConfig;
use leanpawgress_backend::io::rest::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let state = initialize_backend(&config)?;
    let app = create_router(state, config.static_directory.as_deref());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
