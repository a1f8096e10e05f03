//! Protocol modules (path-encoded + JSON-bodied).
//!
//! Both surfaces map onto the same `MetricUpdate` / lookup pair:
//! - Path surface: `/update/{kind}/{name}/{value}` and `/value/{kind}/{name}`.
//! - JSON surface: a `Metrics` record posted to `/update/` or `/value/`.
//!
//! Parsers never panic; every malformed input is reported as `MetricsError`
//! carrying the client code the server maps to an HTTP status.

pub mod json;
pub mod path;
