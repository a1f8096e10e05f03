//! Agent-local working set.
//!
//! The poller builds a fresh `WorkingSet` from the previous one and publishes
//! it with a single atomic pointer swap; the reporter only ever loads whole
//! sets, so it never observes a half-applied poll.

use std::collections::BTreeMap;
use std::sync::Arc;

use arc_swap::ArcSwap;

use metricsd_core::POLL_COUNT;

use crate::source::Snapshot;

/// Handle shared by the poll and report tasks.
pub type SharedWorkingSet = Arc<ArcSwap<WorkingSet>>;

pub fn shared() -> SharedWorkingSet {
    Arc::new(ArcSwap::from_pointee(WorkingSet::default()))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingSet {
    gauges: BTreeMap<String, f64>,
    poll_count: i64,
}

impl WorkingSet {
    /// Successor after one poll tick: sampled names take the new value,
    /// `PollCount` grows by one.
    ///
    /// A sample named `PollCount` and non-finite samples are dropped.
    pub fn next(&self, snapshot: Snapshot) -> Self {
        let mut gauges = self.gauges.clone();
        for (name, value) in snapshot {
            if name == POLL_COUNT || !value.is_finite() {
                tracing::debug!(%name, value, "sample dropped");
                continue;
            }
            gauges.insert(name, value);
        }
        Self {
            gauges,
            poll_count: self.poll_count.saturating_add(1),
        }
    }

    pub fn poll_count(&self) -> i64 {
        self.poll_count
    }

    pub fn gauge(&self, name: &str) -> Option<f64> {
        self.gauges.get(name).copied()
    }

    pub fn gauges(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.gauges.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}
