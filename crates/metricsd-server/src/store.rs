//! In-memory metric store.
//!
//! Two maps (gauges, counters) behind one readers-writer lock. The maps never
//! leave this module; callers only see the synchronized operations below.
//! The lock is never held across an `.await`.

use std::collections::HashMap;

use parking_lot::RwLock;

use metricsd_core::{MetricKind, MetricUpdate, MetricValue};

/// One row of a store snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricEntry {
    pub name: String,
    pub value: MetricValue,
}

impl MetricEntry {
    pub fn kind(&self) -> MetricKind {
        self.value.kind()
    }
}

#[derive(Default)]
struct Maps {
    gauges: HashMap<String, f64>,
    counters: HashMap<String, i64>,
}

/// Volatile metric store shared by all request handlers.
#[derive(Default)]
pub struct MetricStore {
    inner: RwLock<Maps>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the gauge's value.
    pub fn update_gauge(&self, name: &str, value: f64) {
        let mut maps = self.inner.write();
        match maps.gauges.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                maps.gauges.insert(name.to_string(), value);
            }
        }
    }

    /// Add `delta` to the counter (absent counts as zero). Saturates at the
    /// `i64` bounds.
    pub fn update_counter(&self, name: &str, delta: i64) {
        let mut maps = self.inner.write();
        match maps.counters.get_mut(name) {
            Some(slot) => *slot = slot.saturating_add(delta),
            None => {
                maps.counters.insert(name.to_string(), delta);
            }
        }
    }

    pub fn get_gauge(&self, name: &str) -> Option<f64> {
        self.inner.read().gauges.get(name).copied()
    }

    pub fn get_counter(&self, name: &str) -> Option<i64> {
        self.inner.read().counters.get(name).copied()
    }

    /// Apply a validated update with the merge rule of its kind.
    pub fn apply(&self, update: &MetricUpdate) {
        match update.value {
            MetricValue::Gauge(v) => self.update_gauge(&update.name, v),
            MetricValue::Counter(d) => self.update_counter(&update.name, d),
        }
    }

    pub fn get(&self, kind: MetricKind, name: &str) -> Option<MetricValue> {
        match kind {
            MetricKind::Gauge => self.get_gauge(name).map(MetricValue::Gauge),
            MetricKind::Counter => self.get_counter(name).map(MetricValue::Counter),
        }
    }

    /// Point-in-time copy of every metric, taken under one read lock.
    ///
    /// Rows are sorted by kind, then name.
    pub fn list_all(&self) -> Vec<MetricEntry> {
        let mut out = {
            let maps = self.inner.read();
            let mut out = Vec::with_capacity(maps.gauges.len() + maps.counters.len());
            out.extend(maps.gauges.iter().map(|(name, v)| MetricEntry {
                name: name.clone(),
                value: MetricValue::Gauge(*v),
            }));
            out.extend(maps.counters.iter().map(|(name, d)| MetricEntry {
                name: name.clone(),
                value: MetricValue::Counter(*d),
            }));
            out
        };
        out.sort_by(|a, b| a.kind().cmp(&b.kind()).then_with(|| a.name.cmp(&b.name)));
        out
    }

    pub fn len(&self) -> usize {
        let maps = self.inner.read();
        maps.gauges.len() + maps.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
