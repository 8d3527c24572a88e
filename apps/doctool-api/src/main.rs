//! doctool API server entry point.

use anyhow::Result;
use doctool_api::{app, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("doctool_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        addr = %config.listen_addr,
        max_upload_bytes = config.max_upload_bytes,
        "Starting doctool API"
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app(config)).await?;

    Ok(())
}
