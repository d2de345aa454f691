//! DHPO gateway server.
//!
//! Reads its configuration from the environment and serves the REST
//! façade until killed.
//!
//! Usage:
//!   DHPO_LOGIN=... DHPO_PASSWORD=... cargo run --package dhpo-gateway

use anyhow::Context;
use dhpo_gateway::{create_router, AppState, GatewayConfig};
use dhpo_soap::SharedDhpoClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dhpo_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env().context("gateway configuration is invalid")?;
    let bind = config.bind;
    tracing::info!(endpoint = %config.dhpo.endpoint(), "DHPO endpoint configured");

    let state = AppState::new(SharedDhpoClient::new(config.dhpo));
    let app = create_router(state);

    tracing::info!("DHPO gateway listening on http://{}", bind);
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    axum::serve(listener, app).await.context("server terminated")?;

    Ok(())
}
