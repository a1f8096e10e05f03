//! metricsd collecting agent.

use tracing_subscriber::{fmt, EnvFilter};

use metricsd_agent::config;
use metricsd_agent::source::RuntimeSource;
use metricsd_agent::transport::HttpTransport;
use metricsd_core::error::{MetricsError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cfg = config::load()?;
    let transport = HttpTransport::new(&cfg.address, cfg.format, cfg.send_timeout())?;

    tracing::info!(
        address = %cfg.address,
        poll_secs = cfg.poll_interval_secs,
        report_secs = cfg.report_interval_secs,
        format = ?cfg.format,
        "metricsd-agent starting"
    );

    let handle = metricsd_agent::spawn(
        RuntimeSource::new(),
        transport,
        cfg.poll_every(),
        cfg.report_every(),
    );

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| MetricsError::Internal(format!("signal handler failed: {e}")))?;
    tracing::info!("shutting down");
    handle.shutdown().await;
    Ok(())
}
