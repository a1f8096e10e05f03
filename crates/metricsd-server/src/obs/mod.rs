//! Request observability.
//!
//! Every request passes through the access-log middleware, which emits one
//! structured `tracing` event with method, path, status and latency.

pub mod access_log;
