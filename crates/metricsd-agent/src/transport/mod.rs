//! Transports used by the report phase to push one metric at a time.

pub mod http;

use std::sync::Arc;

use async_trait::async_trait;

use metricsd_core::error::Result;
use metricsd_core::MetricUpdate;

pub use http::{HttpTransport, WireFormat};

/// Single-metric send.
///
/// Implementations bound every call with their own timeout; a failure is
/// reported to the caller and never retried here.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_one(&self, update: &MetricUpdate) -> Result<()>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send_one(&self, update: &MetricUpdate) -> Result<()> {
        (**self).send_one(update).await
    }
}
