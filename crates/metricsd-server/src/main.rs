//! metricsd aggregator.
//!
//! - Path surface: /update/{kind}/{name}/{value}, /value/{kind}/{name}
//! - JSON surface: /update/, /value/
//! - Listing: /

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use metricsd_core::error::{MetricsError, Result};
use metricsd_server::{app_state, config};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cfg = config::load()?;
    let address = cfg.address.clone();

    let listener = TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!(%address, error = %e, "failed to bind");
        MetricsError::Internal(format!("bind {address} failed: {e}"))
    })?;

    tracing::info!(%address, "metricsd-server starting");
    metricsd_server::serve(listener, app_state::AppState::new(cfg)).await
}
