//! metricsd core: transport-agnostic metric types, wire protocol and errors.
//!
//! This crate defines the metric model and the two update/read surfaces
//! (path-encoded and JSON-bodied) shared by the aggregator server and the
//! collecting agent. It carries no transport or runtime dependencies so both
//! sides of the wire parse and render values identically.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `MetricsError`/`Result` so malformed requests
//! can never take the server down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod net;
pub mod protocol;

/// Shared result type.
pub use error::{Result, MetricsError};
pub use metric::{MetricKind, MetricUpdate, MetricValue, POLL_COUNT};
