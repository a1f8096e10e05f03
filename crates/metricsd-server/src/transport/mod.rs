//! HTTP surfaces of the aggregator.
//!
//! Handlers only translate between requests and `MetricStore` calls; all
//! validation lives in `metricsd_core::protocol`.

pub mod json;
pub mod listing;
pub mod path;
pub mod reply;
