//! Metric model: the two kinds and their values.

use std::fmt;
use std::str::FromStr;

use crate::error::{MetricsError, Result};

/// Name of the agent-local poll counter, the only metric reported as a counter.
pub const POLL_COUNT: &str = "PollCount";

/// Metric kind; decides the merge rule applied by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricKind {
    /// Updates overwrite the stored value.
    Gauge,
    /// Updates add to the stored value.
    Counter,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gauge" => Ok(MetricKind::Gauge),
            "counter" => Ok(MetricKind::Counter),
            other => Err(MetricsError::BadRequest(format!("unknown metric type: {other}"))),
        }
    }
}

/// A typed metric value. The variant carries the kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Gauge(f64),
    Counter(i64),
}

impl MetricValue {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricValue::Gauge(_) => MetricKind::Gauge,
            MetricValue::Counter(_) => MetricKind::Counter,
        }
    }

    /// Parse the textual value of a metric of the given kind.
    ///
    /// Gauges accept any finite `f64`; counters accept base-10 `i64`.
    pub fn parse(kind: MetricKind, raw: &str) -> Result<Self> {
        match kind {
            MetricKind::Gauge => {
                let v: f64 = raw
                    .parse()
                    .map_err(|_| MetricsError::BadRequest(format!("invalid gauge value: {raw}")))?;
                if !v.is_finite() {
                    return Err(MetricsError::BadRequest(format!(
                        "gauge value must be finite: {raw}"
                    )));
                }
                Ok(MetricValue::Gauge(v))
            }
            MetricKind::Counter => raw
                .parse::<i64>()
                .map(MetricValue::Counter)
                .map_err(|_| MetricsError::BadRequest(format!("invalid counter value: {raw}"))),
        }
    }
}

/// Renders the value as decimal text.
///
/// Floats use the shortest representation that round-trips, without an
/// exponent or trailing zeros (`23.5`, `5`, `0.1`).
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Gauge(v) => write!(f, "{v}"),
            MetricValue::Counter(v) => write!(f, "{v}"),
        }
    }
}

/// One validated update, ready to be applied to a store.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricUpdate {
    pub name: String,
    pub value: MetricValue,
}

impl MetricUpdate {
    pub fn gauge(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value: MetricValue::Gauge(value) }
    }

    pub fn counter(name: impl Into<String>, delta: i64) -> Self {
        Self { name: name.into(), value: MetricValue::Counter(delta) }
    }

    pub fn kind(&self) -> MetricKind {
        self.value.kind()
    }
}
