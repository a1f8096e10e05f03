//! Collecting agent: two independently scheduled jobs over one working set.
//!
//! - Poll job (`poll_every`): sample the source, publish the next working set.
//! - Report job (`report_every`): send every metric of the current working
//!   set through the transport. A failed send is logged and skipped.
//!
//! `PollCount` is reported as a counter delta: the reporter remembers the
//! last value the aggregator acknowledged and sends the difference, so the
//! remote total converges to the local count without counting an
//! acknowledged increment twice. A failed send leaves the mark untouched
//! and the missing increments ride along with the next cycle.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use metricsd_core::error::Result;
use metricsd_core::{MetricUpdate, POLL_COUNT};

use crate::source::SnapshotSource;
use crate::transport::Transport;
use crate::working_set::{self, SharedWorkingSet, WorkingSet};

fn ticker(every: Duration) -> tokio::time::Interval {
    // First tick after one full period, like a plain ticker.
    let mut tick = interval_at(Instant::now() + every, every);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tick
}

pub struct Poller<S> {
    source: S,
    working: SharedWorkingSet,
}

impl<S: SnapshotSource> Poller<S> {
    pub fn new(source: S, working: SharedWorkingSet) -> Self {
        Self { source, working }
    }

    /// One poll tick. On a source error the working set is left as is.
    pub fn poll_once(&mut self) -> Result<()> {
        let snapshot = self.source.sample()?;
        let next = self.working.load().next(snapshot);
        tracing::debug!(poll_count = next.poll_count(), samples = next.len(), "polled");
        self.working.store(Arc::new(next));
        Ok(())
    }

    pub async fn run(mut self, every: Duration) {
        let mut tick = ticker(every);
        loop {
            tick.tick().await;
            if let Err(e) = self.poll_once() {
                tracing::warn!(source = self.source.name(), error = %e, "poll failed");
            }
        }
    }
}

/// Result of one report cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOutcome {
    pub sent: usize,
    pub failed: usize,
}

pub struct Reporter<T> {
    transport: T,
    working: SharedWorkingSet,
    acked_poll_count: i64,
}

impl<T: Transport> Reporter<T> {
    pub fn new(transport: T, working: SharedWorkingSet) -> Self {
        Self {
            transport,
            working,
            acked_poll_count: 0,
        }
    }

    /// `PollCount` value the aggregator has acknowledged so far.
    pub fn acked_poll_count(&self) -> i64 {
        self.acked_poll_count
    }

    async fn send(&self, update: &MetricUpdate, outcome: &mut ReportOutcome) -> bool {
        match self.transport.send_one(update).await {
            Ok(()) => {
                outcome.sent += 1;
                true
            }
            Err(e) => {
                tracing::warn!(name = %update.name, kind = %update.kind(), error = %e, "send failed");
                outcome.failed += 1;
                false
            }
        }
    }

    /// One report tick over a single consistent working set.
    ///
    /// Nothing is sent before the first poll.
    pub async fn report_once(&mut self) -> ReportOutcome {
        let ws = self.working.load_full();
        let mut outcome = ReportOutcome::default();
        if ws.poll_count() == 0 {
            tracing::debug!("nothing polled yet, report skipped");
            return outcome;
        }

        for (name, value) in ws.gauges() {
            self.send(&MetricUpdate::gauge(name, value), &mut outcome).await;
        }

        let delta = ws.poll_count().saturating_sub(self.acked_poll_count);
        if self.send(&MetricUpdate::counter(POLL_COUNT, delta), &mut outcome).await {
            self.acked_poll_count = ws.poll_count();
        }

        if outcome.failed > 0 {
            tracing::warn!(sent = outcome.sent, failed = outcome.failed, "report cycle incomplete");
        } else {
            tracing::info!(sent = outcome.sent, poll_count = ws.poll_count(), "report cycle done");
        }
        outcome
    }

    pub async fn run(mut self, every: Duration) {
        let mut tick = ticker(every);
        loop {
            tick.tick().await;
            self.report_once().await;
        }
    }
}

/// Running agent: the two spawned jobs and their shared working set.
pub struct AgentHandle {
    working: SharedWorkingSet,
    poll: JoinHandle<()>,
    report: JoinHandle<()>,
}

impl AgentHandle {
    /// Latest published working set.
    pub fn working_set(&self) -> Arc<WorkingSet> {
        self.working.load_full()
    }

    /// Stop both jobs. An in-flight send is dropped.
    pub async fn shutdown(self) {
        self.poll.abort();
        self.report.abort();
        let _ = self.poll.await;
        let _ = self.report.await;
    }
}

/// Spawn the poll and report jobs on the current tokio runtime.
pub fn spawn<S, T>(source: S, transport: T, poll_every: Duration, report_every: Duration) -> AgentHandle
where
    S: SnapshotSource + 'static,
    T: Transport + 'static,
{
    let working = working_set::shared();
    let poller = Poller::new(source, Arc::clone(&working));
    let reporter = Reporter::new(transport, Arc::clone(&working));

    AgentHandle {
        poll: tokio::spawn(poller.run(poll_every)),
        report: tokio::spawn(reporter.run(report_every)),
        working,
    }
}
