//! Path-encoded surface.
//!
//! Validation order for updates (first failure wins):
//! 1. empty name => `NotFound`
//! 2. unknown kind => `BadRequest`
//! 3. unparsable value => `BadRequest`

use crate::error::{MetricsError, Result};
use crate::metric::{MetricKind, MetricUpdate, MetricValue};

/// Route prefix for updates.
pub const UPDATE_PREFIX: &str = "/update";
/// Route prefix for reads.
pub const VALUE_PREFIX: &str = "/value";

/// Parse the three path segments of an update request.
pub fn parse_update(kind: &str, name: &str, value: &str) -> Result<MetricUpdate> {
    if name.is_empty() {
        return Err(MetricsError::NotFound("metric name is empty".into()));
    }
    let kind: MetricKind = kind.parse()?;
    let value = MetricValue::parse(kind, value)?;
    Ok(MetricUpdate { name: name.to_string(), value })
}

/// Parse the two path segments of a read request.
///
/// Only the kind is validated here; an empty or unknown name is a lookup miss.
pub fn parse_lookup(kind: &str, name: &str) -> Result<(MetricKind, String)> {
    let kind: MetricKind = kind.parse()?;
    Ok((kind, name.to_string()))
}

/// Client-side encoding of an update as a request path.
pub fn update_path(update: &MetricUpdate) -> String {
    format!(
        "{UPDATE_PREFIX}/{}/{}/{}",
        update.kind(),
        update.name,
        update.value
    )
}

/// Client-side encoding of a read as a request path.
pub fn value_path(kind: MetricKind, name: &str) -> String {
    format!("{VALUE_PREFIX}/{kind}/{name}")
}
