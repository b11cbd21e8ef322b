//! Terbilang API Server
//!
//! REST API for Indonesian number-to-words conversion
//!
//! Usage:
//!   cargo run --bin terbilang_api
//!
//! Environment:
//!   PORT / TERBILANG_PORT - Server port (default: 8080)
//!   TERBILANG_HOST        - Server host (default: 0.0.0.0)
//!   TERBILANG_RATE_LIMIT  - Requests per minute per client, 0 = off (default: 100)
//!   TERBILANG_TRUST_PROXY - Key clients by X-Forwarded-For (default: false)
//!   RUST_LOG              - Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;
use terbilang::api::{create_router, start_cleanup_task, AppState};
use terbilang::utils::constants::{APP_NAME, APP_VERSION};
use terbilang::ApiConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = ApiConfig::from_env()?;
    let addr = config.socket_addr()?;

    let state = Arc::new(AppState::new(config));

    if state.rate_limiter.is_enabled() {
        start_cleanup_task(state.rate_limiter.clone());
        info!(
            limit = state.config.rate_limit.requests_per_window,
            window_secs = state.config.rate_limit.window_duration.as_secs(),
            "🧹 Rate limiter enabled, cleanup task started"
        );
    }

    let app = create_router(state);

    info!("🚀 {} v{} starting on http://{}", APP_NAME, APP_VERSION, addr);
    info!("Endpoints:");
    info!("  GET|POST /api/terbilang        - Terbilang (JSON / XML)");
    info!("  GET      /api/terbilang-plain  - Terbilang (text/plain)");
    info!("  GET      /health               - Health check");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    // Peer address feeds the per-client rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 {} shutdown complete", APP_NAME);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("🛑 Shutdown signal received");
}
