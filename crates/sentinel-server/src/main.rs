//! SentinelPay dashboard HTTP server
//!
//! Serves the fraud and payment metrics dashboard backed by the
//! transaction service's admin API.

use anyhow::Result;
use sentinel_gateway::MetricsGateway;
use sentinel_server::api;
use sentinel_server::config::ServerConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration, refusing to start without backend settings
    let config = ServerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let gateway = MetricsGateway::new(config.gateway_config())?;
    info!("Metrics gateway initialized for {}", config.backend.base_url);

    let app = api::create_router(gateway);

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Dashboard:    http://{}/", addr);
    info!("  Dashboard API: http://{}/api/v1/dashboard", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sentinel_server=info,sentinel_gateway=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
