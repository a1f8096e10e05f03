//! Snapshot sources for the poll phase.
//!
//! A [`SnapshotSource`] returns one complete set of named gauge samples per
//! call. The poller owns the source exclusively, so implementations may keep
//! mutable state (refresh buffers, handles) between calls.

pub mod runtime;

use std::collections::BTreeMap;

use metricsd_core::error::Result;

pub use runtime::RuntimeSource;

/// Named numeric samples taken at one instant.
pub type Snapshot = BTreeMap<String, f64>;

/// Name of the synthetic sample every runtime snapshot carries.
pub const RANDOM_VALUE: &str = "RandomValue";

pub trait SnapshotSource: Send {
    /// Source name, used for logging.
    fn name(&self) -> &str;

    /// Take one snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying statistics cannot be read; the
    /// poller skips that tick.
    fn sample(&mut self) -> Result<Snapshot>;
}
