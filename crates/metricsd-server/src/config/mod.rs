//! Server config loader (flags > environment > defaults, then validate).

pub mod schema;

use std::ffi::OsString;

use clap::Parser;
use metricsd_core::error::{MetricsError, Result};

pub use schema::ServerConfig;

/// Parse the process arguments. Clap prints usage and exits non-zero on
/// malformed or unexpected arguments.
pub fn load() -> Result<ServerConfig> {
    let cfg = ServerConfig::parse();
    cfg.validate()?;
    Ok(cfg)
}

/// Parse an explicit argument list (first item is the program name).
pub fn load_from_args<I, T>(args: I) -> Result<ServerConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cfg = ServerConfig::try_parse_from(args)
        .map_err(|e| MetricsError::InvalidConfig(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}
