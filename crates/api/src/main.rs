mod app;
mod config;
mod metrics;
mod render;

use anyhow::{Context, Result};
use classify::{AnalysisClient, Analyzer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::app::AppState;
use crate::config::{AppConfig, LogFormat};
use crate::metrics::Metrics;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    match config.logging.format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let client = AnalysisClient::new(
        config.classifier.endpoint.clone(),
        config.request_timeout(),
    )?;
    let analyzer = Analyzer::new(client, config.grouping)?;

    let state = Arc::new(AppState {
        analyzer,
        metrics: Metrics::new(),
    });

    let app = app::router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .context(format!("Failed to bind {}", config.server.bind_addr))?;

    tracing::info!(
        addr = %config.server.bind_addr,
        classifier = %config.classifier.endpoint,
        group_size = config.grouping.group_size,
        "Server listening"
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
