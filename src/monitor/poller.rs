//! Per-URL polling loop.
//!
//! # Responsibilities
//! - Fire one probe immediately at start, then on every interval tick
//! - Merge each outcome into the shared store and dispatch the resulting
//!   alerts
//! - Stop cleanly on the shutdown signal without alerting for the in-flight
//!   cycle
//!
//! # Design Decisions
//! - Cycles are strictly sequential; a missed tick is delayed, never
//!   queued behind the buffered one
//! - Shutdown branches are `biased` first in both selects so cancellation
//!   wins the race against a tick or an in-flight probe
//! - Notification delivery failures are logged and swallowed; they never
//!   abort the loop

use crate::monitor::probe::Prober;
use crate::monitor::state::StateStore;
use crate::notify::Notifier;
use crate::observability::metrics;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

/// Timer-driven monitor loop for a single URL.
pub struct Poller {
    url: String,
    prober: Arc<Prober>,
    store: Arc<StateStore>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    drift_enabled: bool,
}

impl Poller {
    pub fn new(
        url: String,
        prober: Arc<Prober>,
        store: Arc<StateStore>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        drift_enabled: bool,
    ) -> Self {
        Self {
            url,
            prober,
            store,
            notifier,
            interval,
            drift_enabled,
        }
    }

    /// Run until the shutdown signal fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(url = %self.url, interval_secs = self.interval.as_secs(), "poller starting");

        // The first tick completes immediately, giving the unconditional
        // first probe at start.
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {}
            }

            let outcome = tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                outcome = self.prober.probe(&self.url) => outcome,
            };

            let alerts = self.store.record(&self.url, &outcome, self.drift_enabled);

            let healthy = self.store.is_ok(&self.url).unwrap_or(false);
            metrics::record_probe(&self.url, healthy);
            tracing::debug!(url = %self.url, ?outcome, healthy, "probe cycle complete");

            for alert in alerts {
                tracing::info!(url = %self.url, kind = alert.kind(), "alert fired");
                metrics::record_alert(alert.kind());
                if let Err(e) = self.notifier.send(alert.to_string()).await {
                    tracing::warn!(url = %self.url, error = %e, "alert delivery failed");
                }
            }
        }

        tracing::info!(url = %self.url, "poller stopped");
    }
}
