use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use patient_metrics_api::{app, ApiConfig, AppState};
use patient_metrics_core::JsonFileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env()?;
    let addr = config.bind_addr()?;

    let store = Arc::new(JsonFileStore::new(&config.data_file));
    let state = AppState::new(store);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, data_file = %config.data_file.display(), "patient metrics API listening");

    axum::serve(listener, app(state))
        .await
        .context("server error")?;
    Ok(())
}
