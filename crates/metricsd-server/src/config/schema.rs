use clap::Parser;
use metricsd_core::error::Result;
use metricsd_core::net::{validate_address, DEFAULT_ADDRESS};

/// Metric aggregator: accepts gauge/counter updates over HTTP and serves
/// the latest values back.
#[derive(Debug, Clone, Parser)]
#[command(name = "metricsd-server", version)]
pub struct ServerConfig {
    /// Listen address (host:port).
    #[arg(short = 'a', long = "address", env = "ADDRESS", default_value = DEFAULT_ADDRESS)]
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        validate_address(&self.address)
    }
}
