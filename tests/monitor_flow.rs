//! End-to-end poller tests against programmable mock backends.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use sitemon::config::MonitorConfig;
use sitemon::lifecycle::Shutdown;
use sitemon::monitor::{MonitorService, Poller, Prober, StateError, StateStore};

mod common;

fn poller_for(
    url: String,
    store: Arc<StateStore>,
    notifier: Arc<common::ChannelNotifier>,
    interval: Duration,
) -> Poller {
    let prober = Arc::new(Prober::new(Duration::from_secs(5)).unwrap());
    Poller::new(url, prober, store, notifier, interval, true)
}

#[tokio::test]
async fn test_outage_and_recovery_alerts() {
    // Requests 0-1 succeed, 2-4 fail, everything after recovers.
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let addr = common::start_programmable_backend(move || {
        let c = c.clone();
        async move {
            match c.fetch_add(1, Ordering::SeqCst) {
                0 | 1 => (200, "0123456789".into()),
                2..=4 => (500, "err".into()),
                _ => (200, "0123456789".into()),
            }
        }
    })
    .await;
    let url = format!("http://{addr}/");

    let (notifier, mut rx) = common::ChannelNotifier::new();
    let store = Arc::new(StateStore::new());
    let shutdown = Shutdown::new();

    let poller = poller_for(url.clone(), store.clone(), notifier, Duration::from_millis(25));
    let handle = tokio::spawn(poller.run(shutdown.subscribe()));

    let first = timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no down alert")
        .unwrap();
    assert!(first.contains("Endpoint down"), "got: {first}");
    assert!(first.contains(&url));

    let second = timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no recovery alert")
        .unwrap();
    assert!(second.contains("Endpoint recovered"), "got: {second}");

    shutdown.trigger();
    handle.await.unwrap();

    let state = store.get(&url).unwrap();
    assert_eq!(state.consecutive_failures, 0);
    assert_eq!(state.current_status, 200);
}

#[tokio::test]
async fn test_down_alert_requires_three_failures() {
    // A two-cycle blip followed by recovery must stay silent.
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let addr = common::start_programmable_backend(move || {
        let c = c.clone();
        async move {
            match c.fetch_add(1, Ordering::SeqCst) {
                0 | 1 => (500, "err".into()),
                _ => (200, "ok".into()),
            }
        }
    })
    .await;
    let url = format!("http://{addr}/");

    let (notifier, mut rx) = common::ChannelNotifier::new();
    let store = Arc::new(StateStore::new());
    let shutdown = Shutdown::new();

    let poller = poller_for(url.clone(), store.clone(), notifier, Duration::from_millis(25));
    let handle = tokio::spawn(poller.run(shutdown.subscribe()));

    // Run long enough for the blip and several healthy cycles.
    tokio::time::sleep(Duration::from_millis(400)).await;
    shutdown.trigger();
    handle.await.unwrap();

    assert!(rx.try_recv().is_err(), "no alert expected for a short blip");
    assert_eq!(store.get(&url).unwrap().consecutive_failures, 0);
}

#[tokio::test]
async fn test_content_drift_alert_fires_once() {
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let addr = common::start_programmable_backend(move || {
        let c = c.clone();
        async move {
            if c.fetch_add(1, Ordering::SeqCst) < 2 {
                (200, "aaaaaaaaaa".into())
            } else {
                (200, "bbbbbbbbbbbbbbbbbbbb".into())
            }
        }
    })
    .await;
    let url = format!("http://{addr}/");

    let (notifier, mut rx) = common::ChannelNotifier::new();
    let store = Arc::new(StateStore::new());
    let shutdown = Shutdown::new();

    let poller = poller_for(url.clone(), store.clone(), notifier, Duration::from_millis(25));
    let handle = tokio::spawn(poller.run(shutdown.subscribe()));

    let alert = timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no drift alert")
        .unwrap();
    assert!(alert.contains("Content length changed"), "got: {alert}");

    // The new length is the baseline now; further cycles stay silent.
    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown.trigger();
    handle.await.unwrap();

    assert!(rx.try_recv().is_err(), "drift alert must fire exactly once");
    assert_eq!(store.content_length(&url).unwrap(), 20);
}

#[tokio::test]
async fn test_state_not_found_until_first_probe() {
    let store = StateStore::new();
    assert_eq!(
        store.get("http://never-probed.example"),
        Err(StateError::NotFound("http://never-probed.example".into()))
    );
}

#[tokio::test]
async fn test_shutdown_mid_probe_emits_no_alert() {
    // Backend stalls longer than the test runs, keeping a probe in flight.
    let addr = common::start_programmable_backend(|| async {
        tokio::time::sleep(Duration::from_secs(30)).await;
        (500, "late".into())
    })
    .await;
    let url = format!("http://{addr}/");

    let (notifier, mut rx) = common::ChannelNotifier::new();
    let store = Arc::new(StateStore::new());
    let shutdown = Shutdown::new();

    let poller = poller_for(url, store.clone(), notifier, Duration::from_millis(25));
    let handle = tokio::spawn(poller.run(shutdown.subscribe()));

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.trigger();

    // Cancellation must win the race against the in-flight probe.
    timeout(Duration::from_secs(1), handle)
        .await
        .expect("poller did not stop after shutdown")
        .unwrap();
    assert!(rx.try_recv().is_err(), "cancelled cycle must not alert");
}

#[tokio::test]
async fn test_service_quiesces_and_sends_stopping_notice() {
    let addr = common::start_programmable_backend(|| async { (200, "ok".into()) }).await;

    let mut config = MonitorConfig::default();
    config.endpoints = vec![format!("http://{addr}/")];
    config.poll.interval_secs = 1;

    let (notifier, mut rx) = common::ChannelNotifier::new();
    let shutdown = Shutdown::new();
    let mut service = MonitorService::new(config, notifier).unwrap();
    service.start(&shutdown);

    // Let the immediate first probe land.
    tokio::time::sleep(Duration::from_millis(300)).await;

    shutdown.trigger();
    timeout(Duration::from_secs(2), service.quiesce())
        .await
        .expect("pollers did not quiesce");

    let notice = rx.try_recv().expect("stopping notice missing");
    assert_eq!(notice, "Monitoring service stopping");
    assert!(rx.try_recv().is_err(), "healthy endpoint must not alert");
}
