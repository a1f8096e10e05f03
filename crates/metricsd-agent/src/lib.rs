//! metricsd collecting agent.
//!
//! Samples a [`source::SnapshotSource`] on the poll cadence into a private
//! working set and pushes that set to the aggregator through a
//! [`transport::Transport`] on the independent report cadence.

pub mod agent;
pub mod config;
pub mod source;
pub mod transport;
pub mod working_set;

pub use agent::{spawn, AgentHandle, Poller, ReportOutcome, Reporter};
