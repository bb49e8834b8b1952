//! Clarity backend entry point.

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clarity_backend::adapters::http::{api_router, AppState};
use clarity_backend::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    config.validate()?;

    let state = AppState::initialize(&config).await;
    tracing::info!(
        gemini_enabled = state.gemini_enabled(),
        mongodb_enabled = state.mongodb_enabled(),
        "Clarity backend starting"
    );

    let app = api_router(state).layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
