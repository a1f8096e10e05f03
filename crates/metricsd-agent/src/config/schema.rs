use std::time::Duration;

use clap::Parser;
use metricsd_core::error::{MetricsError, Result};
use metricsd_core::net::{validate_address, DEFAULT_ADDRESS};

use crate::transport::WireFormat;

/// Collecting agent: samples runtime statistics and pushes them to the
/// aggregator.
#[derive(Debug, Clone, Parser)]
#[command(name = "metricsd-agent", version)]
pub struct AgentConfig {
    /// Aggregator address (host:port).
    #[arg(short = 'a', long = "address", env = "ADDRESS", default_value = DEFAULT_ADDRESS)]
    pub address: String,

    /// Poll interval in seconds.
    #[arg(short = 'p', long = "poll-interval", env = "POLL_INTERVAL", default_value_t = 2)]
    pub poll_interval_secs: u64,

    /// Report interval in seconds.
    #[arg(short = 'r', long = "report-interval", env = "REPORT_INTERVAL", default_value_t = 10)]
    pub report_interval_secs: u64,

    /// Update surface used for reporting.
    #[arg(short = 'f', long = "format", env = "REPORT_FORMAT", value_enum, default_value_t = WireFormat::Path)]
    pub format: WireFormat,

    /// Per-send timeout in seconds.
    #[arg(short = 't', long = "send-timeout", env = "SEND_TIMEOUT", default_value_t = 5)]
    pub send_timeout_secs: u64,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        validate_address(&self.address)?;
        for (name, secs) in [
            ("poll interval", self.poll_interval_secs),
            ("report interval", self.report_interval_secs),
            ("send timeout", self.send_timeout_secs),
        ] {
            if secs == 0 {
                return Err(MetricsError::InvalidConfig(format!(
                    "{name} must be at least 1 second"
                )));
            }
        }
        Ok(())
    }

    pub fn poll_every(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn report_every(&self) -> Duration {
        Duration::from_secs(self.report_interval_secs)
    }

    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }
}
