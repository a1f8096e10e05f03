#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use metricsd_agent::source::{Snapshot, SnapshotSource};
use metricsd_agent::transport::Transport;
use metricsd_core::error::{MetricsError, Result};
use metricsd_core::MetricUpdate;

/// Source replaying scripted snapshots; repeats the last one when exhausted.
pub struct ScriptedSource {
    script: VecDeque<Snapshot>,
    last: Snapshot,
}

impl ScriptedSource {
    pub fn new(script: Vec<Vec<(&str, f64)>>) -> Self {
        Self {
            script: script
                .into_iter()
                .map(|s| s.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
                .collect(),
            last: Snapshot::new(),
        }
    }
}

impl SnapshotSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    fn sample(&mut self) -> Result<Snapshot> {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        Ok(self.last.clone())
    }
}

/// Source that always fails.
pub struct BrokenSource;

impl SnapshotSource for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    fn sample(&mut self) -> Result<Snapshot> {
        Err(MetricsError::Internal("stats unavailable".into()))
    }
}

/// Transport recording every attempt; names in `failing` are rejected.
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<MetricUpdate>>,
    pub failing: Mutex<HashSet<String>>,
}

impl RecordingTransport {
    pub fn failing(names: &[&str]) -> Self {
        let t = Self::default();
        t.failing
            .lock()
            .unwrap()
            .extend(names.iter().map(|n| n.to_string()));
        t
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn sent(&self) -> Vec<MetricUpdate> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_named(&self, name: &str) -> Vec<MetricUpdate> {
        self.sent().into_iter().filter(|u| u.name == name).collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_one(&self, update: &MetricUpdate) -> Result<()> {
        if self.failing.lock().unwrap().contains(&update.name) {
            return Err(MetricsError::Transport(format!("refused {}", update.name)));
        }
        self.sent.lock().unwrap().push(update.clone());
        Ok(())
    }
}
