#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use metricsd_agent::working_set;
use metricsd_agent::{Poller, ReportOutcome, Reporter};
use metricsd_core::{MetricKind, MetricUpdate, MetricValue, POLL_COUNT};

use common::{BrokenSource, RecordingTransport, ScriptedSource};

#[test]
fn polls_count_and_overwrite() {
    let working = working_set::shared();
    let mut poller = Poller::new(
        ScriptedSource::new(vec![
            vec![("Alloc", 100.0), ("RandomValue", 0.1)],
            vec![("Alloc", 200.0), ("RandomValue", 0.2)],
            vec![("Alloc", 50.0), ("RandomValue", 0.3)],
        ]),
        Arc::clone(&working),
    );

    for _ in 0..3 {
        poller.poll_once().unwrap();
    }

    let ws = working.load_full();
    assert_eq!(ws.poll_count(), 3);
    assert_eq!(ws.gauge("Alloc"), Some(50.0));
    assert_eq!(ws.gauge("RandomValue"), Some(0.3));
    assert_eq!(ws.len(), 2);
}

#[test]
fn names_missing_from_a_snapshot_keep_their_value() {
    let working = working_set::shared();
    let mut poller = Poller::new(
        ScriptedSource::new(vec![
            vec![("Alloc", 1.0), ("Sys", 9.0)],
            vec![("Alloc", 2.0)],
        ]),
        Arc::clone(&working),
    );
    poller.poll_once().unwrap();
    poller.poll_once().unwrap();

    let ws = working.load_full();
    assert_eq!(ws.gauge("Alloc"), Some(2.0));
    assert_eq!(ws.gauge("Sys"), Some(9.0));
}

#[test]
fn reserved_and_non_finite_samples_are_dropped() {
    let working = working_set::shared();
    let mut poller = Poller::new(
        ScriptedSource::new(vec![vec![
            (POLL_COUNT, 1000.0),
            ("Bad", f64::NAN),
            ("Good", 1.0),
        ]]),
        Arc::clone(&working),
    );
    poller.poll_once().unwrap();

    let ws = working.load_full();
    assert_eq!(ws.poll_count(), 1);
    assert_eq!(ws.gauge(POLL_COUNT), None);
    assert_eq!(ws.gauge("Bad"), None);
    assert_eq!(ws.gauge("Good"), Some(1.0));
}

#[test]
fn failed_poll_leaves_working_set_untouched() {
    let working = working_set::shared();
    let mut poller = Poller::new(BrokenSource, Arc::clone(&working));
    assert!(poller.poll_once().is_err());
    assert_eq!(working.load().poll_count(), 0);
}

#[tokio::test]
async fn report_classifies_poll_count_as_counter() {
    let working = working_set::shared();
    let mut poller = Poller::new(
        ScriptedSource::new(vec![vec![("Alloc", 10.0), ("HeapSys", 20.0)]]),
        Arc::clone(&working),
    );
    poller.poll_once().unwrap();
    poller.poll_once().unwrap();

    let transport = Arc::new(RecordingTransport::default());
    let mut reporter = Reporter::new(Arc::clone(&transport), Arc::clone(&working));
    let outcome = reporter.report_once().await;
    assert_eq!(outcome, ReportOutcome { sent: 3, failed: 0 });

    let sent = transport.sent();
    assert!(sent.contains(&MetricUpdate::gauge("Alloc", 10.0)));
    assert!(sent.contains(&MetricUpdate::gauge("HeapSys", 20.0)));
    assert!(sent.contains(&MetricUpdate::counter(POLL_COUNT, 2)));
    for u in &sent {
        let expected = if u.name == POLL_COUNT { MetricKind::Counter } else { MetricKind::Gauge };
        assert_eq!(u.kind(), expected, "metric={}", u.name);
    }
}

#[tokio::test]
async fn one_failed_send_does_not_stop_the_cycle() {
    let working = working_set::shared();
    let mut poller = Poller::new(
        ScriptedSource::new(vec![vec![("A", 1.0), ("B", 2.0), ("C", 3.0)]]),
        Arc::clone(&working),
    );
    poller.poll_once().unwrap();

    let transport = Arc::new(RecordingTransport::failing(&["A"]));
    let mut reporter = Reporter::new(Arc::clone(&transport), Arc::clone(&working));
    let outcome = reporter.report_once().await;

    assert_eq!(outcome, ReportOutcome { sent: 3, failed: 1 });
    let names: Vec<String> = transport.sent().into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["B", "C", POLL_COUNT]);
}

#[tokio::test]
async fn poll_count_is_sent_as_delta_since_ack() {
    let working = working_set::shared();
    let mut poller = Poller::new(ScriptedSource::new(vec![vec![("A", 1.0)]]), Arc::clone(&working));
    let transport = Arc::new(RecordingTransport::default());
    let mut reporter = Reporter::new(Arc::clone(&transport), Arc::clone(&working));

    for _ in 0..5 {
        poller.poll_once().unwrap();
    }
    reporter.report_once().await;
    assert_eq!(reporter.acked_poll_count(), 5);

    for _ in 0..3 {
        poller.poll_once().unwrap();
    }
    reporter.report_once().await;
    reporter.report_once().await;

    let deltas: Vec<MetricValue> = transport
        .sent_named(POLL_COUNT)
        .into_iter()
        .map(|u| u.value)
        .collect();
    assert_eq!(
        deltas,
        vec![MetricValue::Counter(5), MetricValue::Counter(3), MetricValue::Counter(0)]
    );
}

#[tokio::test]
async fn lost_poll_count_is_carried_to_next_cycle() {
    let working = working_set::shared();
    let mut poller = Poller::new(ScriptedSource::new(vec![vec![("A", 1.0)]]), Arc::clone(&working));
    let transport = Arc::new(RecordingTransport::failing(&[POLL_COUNT]));
    let mut reporter = Reporter::new(Arc::clone(&transport), Arc::clone(&working));

    for _ in 0..4 {
        poller.poll_once().unwrap();
    }
    let outcome = reporter.report_once().await;
    assert_eq!(outcome.failed, 1);
    assert_eq!(reporter.acked_poll_count(), 0);

    transport.heal();
    poller.poll_once().unwrap();
    reporter.report_once().await;

    let sent = transport.sent_named(POLL_COUNT);
    assert_eq!(sent, vec![MetricUpdate::counter(POLL_COUNT, 5)]);
    assert_eq!(reporter.acked_poll_count(), 5);
}

#[tokio::test]
async fn nothing_is_reported_before_the_first_poll() {
    let working = working_set::shared();
    let transport = Arc::new(RecordingTransport::default());
    let mut reporter = Reporter::new(Arc::clone(&transport), working);

    assert_eq!(reporter.report_once().await, ReportOutcome::default());
    assert!(transport.sent().is_empty());
}

#[tokio::test(start_paused = true)]
async fn poll_and_report_run_on_independent_cadences() {
    let transport = Arc::new(RecordingTransport::default());
    let handle = metricsd_agent::spawn(
        ScriptedSource::new(vec![vec![("Alloc", 1.0)]]),
        Arc::clone(&transport),
        Duration::from_secs(3),
        Duration::from_secs(10),
    );

    // Polls at 3..18 s, reports at 10 s and 20 s.
    tokio::time::sleep(Duration::from_millis(20_500)).await;

    assert_eq!(handle.working_set().poll_count(), 6);
    assert_eq!(
        transport.sent_named(POLL_COUNT),
        vec![MetricUpdate::counter(POLL_COUNT, 3), MetricUpdate::counter(POLL_COUNT, 3)]
    );
    assert_eq!(transport.sent_named("Alloc").len(), 2);

    handle.shutdown().await;
}
