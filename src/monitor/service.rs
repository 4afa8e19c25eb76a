//! Monitor supervisor.
//!
//! # Responsibilities
//! - Spawn one poller task per configured endpoint
//! - Track every started task in a JoinSet, the completion barrier the
//!   process waits on before exiting
//! - Send the best-effort "service stopping" notice during shutdown

use crate::config::MonitorConfig;
use crate::lifecycle::Shutdown;
use crate::monitor::engine::Alert;
use crate::monitor::poller::Poller;
use crate::monitor::probe::Prober;
use crate::monitor::state::StateStore;
use crate::notify::Notifier;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Owns the pollers for the configured endpoint set.
pub struct MonitorService {
    prober: Arc<Prober>,
    store: Arc<StateStore>,
    notifier: Arc<dyn Notifier>,
    config: MonitorConfig,
    tasks: JoinSet<()>,
}

impl MonitorService {
    /// Build the service. Fails only on probe-client construction, a
    /// startup precondition.
    pub fn new(config: MonitorConfig, notifier: Arc<dyn Notifier>) -> Result<Self, reqwest::Error> {
        let prober = Arc::new(Prober::new(config.poll.probe_timeout())?);
        Ok(Self {
            prober,
            store: Arc::new(StateStore::new()),
            notifier,
            config,
            tasks: JoinSet::new(),
        })
    }

    /// Shared state store, readable by status-check helpers.
    pub fn store(&self) -> Arc<StateStore> {
        Arc::clone(&self.store)
    }

    /// Spawn one poller per endpoint. Each poller subscribes to `shutdown`
    /// and probes immediately, not waiting for the first tick.
    pub fn start(&mut self, shutdown: &Shutdown) {
        for url in &self.config.endpoints {
            let poller = Poller::new(
                url.clone(),
                Arc::clone(&self.prober),
                Arc::clone(&self.store),
                Arc::clone(&self.notifier),
                self.config.poll.interval(),
                self.config.content_drift.enabled,
            );
            self.tasks.spawn(poller.run(shutdown.subscribe()));
        }
        tracing::info!(endpoints = self.config.endpoints.len(), "monitor service started");
    }

    /// Wait for every poller to acknowledge the shutdown signal.
    ///
    /// Attempts one outbound "service stopping" notice first; delivery
    /// failure does not delay teardown.
    pub async fn quiesce(mut self) {
        if let Err(e) = self.notifier.send(Alert::Stopping.to_string()).await {
            tracing::warn!(error = %e, "could not deliver stopping notice");
        }

        while let Some(res) = self.tasks.join_next().await {
            if let Err(e) = res {
                tracing::error!(error = %e, "poller task aborted");
            }
        }
        tracing::info!("all pollers stopped");
    }
}
