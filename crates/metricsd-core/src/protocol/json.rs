//! JSON-bodied surface.
//!
//! Every request decodes into its own `Metrics` value; nothing is shared
//! between requests.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};
use crate::metric::{MetricKind, MetricUpdate, MetricValue};

/// Wire record for JSON updates and reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Metric name.
    pub id: String,
    /// Metric kind as text (field name is `type` in JSON).
    #[serde(rename = "type")]
    pub mtype: String,
    /// Counter delta (counter only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
    /// Gauge value (gauge only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Error payload returned by the JSON surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

impl Metrics {
    /// Decode a request body.
    pub fn decode(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| MetricsError::BadRequest(format!("invalid json: {e}")))
    }

    /// Encode a record. Records hold no maps or non-finite floats, so this
    /// only fails on a defect.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| MetricsError::Internal(format!("encode failed: {e}")))
    }

    /// Record carrying exactly the field that matches the value's kind.
    pub fn with_value(id: impl Into<String>, value: MetricValue) -> Self {
        let (delta, gauge) = match value {
            MetricValue::Gauge(v) => (None, Some(v)),
            MetricValue::Counter(d) => (Some(d), None),
        };
        Self {
            id: id.into(),
            mtype: value.kind().as_str().to_string(),
            delta,
            value: gauge,
        }
    }

    pub fn from_update(update: &MetricUpdate) -> Self {
        Self::with_value(update.name.clone(), update.value)
    }

    fn checked_key(&self) -> Result<MetricKind> {
        if self.id.is_empty() {
            return Err(MetricsError::BadRequest("missing id".into()));
        }
        self.mtype.parse()
    }

    /// Validate an update request: gauges need `value`, counters need `delta`.
    pub fn to_update(&self) -> Result<MetricUpdate> {
        let value = match self.checked_key()? {
            MetricKind::Gauge => {
                let v = self
                    .value
                    .ok_or_else(|| MetricsError::BadRequest("missing value".into()))?;
                if !v.is_finite() {
                    return Err(MetricsError::BadRequest("gauge value must be finite".into()));
                }
                MetricValue::Gauge(v)
            }
            MetricKind::Counter => MetricValue::Counter(
                self.delta
                    .ok_or_else(|| MetricsError::BadRequest("missing delta".into()))?,
            ),
        };
        Ok(MetricUpdate { name: self.id.clone(), value })
    }

    /// Validate a read request and return its lookup key.
    pub fn lookup_key(&self) -> Result<(MetricKind, &str)> {
        let kind = self.checked_key()?;
        Ok((kind, self.id.as_str()))
    }
}
