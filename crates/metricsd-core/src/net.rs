//! Address helpers shared by server and agent configuration.

use crate::error::{MetricsError, Result};

/// Default aggregator address.
pub const DEFAULT_ADDRESS: &str = "localhost:8080";

/// Check that `addr` looks like `host:port` with a numeric port.
///
/// Host resolution is left to bind/connect time.
pub fn validate_address(addr: &str) -> Result<()> {
    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| MetricsError::InvalidConfig(format!("address must be host:port: {addr}")))?;
    if host.is_empty() {
        return Err(MetricsError::InvalidConfig(format!("address has no host: {addr}")));
    }
    port.parse::<u16>()
        .map_err(|_| MetricsError::InvalidConfig(format!("address has invalid port: {addr}")))?;
    Ok(())
}

/// Base URL for plain-HTTP requests to `addr`.
pub fn base_url(addr: &str) -> String {
    if addr.contains("://") {
        addr.trim_end_matches('/').to_string()
    } else {
        format!("http://{addr}")
    }
}
