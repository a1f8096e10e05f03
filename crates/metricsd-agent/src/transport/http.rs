//! HTTP transport towards the aggregator (path-encoded or JSON).

use std::time::Duration;

use async_trait::async_trait;
use clap::ValueEnum;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};

use metricsd_core::error::{MetricsError, Result};
use metricsd_core::net::base_url;
use metricsd_core::protocol::json::Metrics;
use metricsd_core::protocol::path::update_path;
use metricsd_core::MetricUpdate;

use super::Transport;

/// Which update surface the agent posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WireFormat {
    /// `POST /update/{kind}/{name}/{value}`
    #[default]
    Path,
    /// `POST /update/` with a JSON record.
    Json,
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
    format: WireFormat,
}

impl HttpTransport {
    pub fn new(address: &str, format: WireFormat, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MetricsError::Internal(format!("http client init failed: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url(address),
            format,
        })
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_one(&self, update: &MetricUpdate) -> Result<()> {
        let req = match self.format {
            WireFormat::Path => self
                .client
                .post(format!("{}{}", self.base_url, update_path(update)))
                .header(CONTENT_TYPE, "text/plain"),
            WireFormat::Json => self
                .client
                .post(format!("{}/update/", self.base_url))
                .json(&Metrics::from_update(update)),
        };

        let resp = req.send().await.map_err(|e| {
            MetricsError::Transport(format!("send {} failed: {e}", update.name))
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(MetricsError::Transport(format!(
                "server returned {status} for {}: {}",
                update.name,
                body.trim()
            )));
        }

        tracing::trace!(kind = %update.kind(), name = %update.name, value = %update.value, "metric sent");
        Ok(())
    }
}
