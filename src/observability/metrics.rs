//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sitemon_probes_total` (counter): probes by url
//! - `sitemon_endpoint_up` (gauge): 1 = last probe settled ok, 0 = not
//! - `sitemon_alerts_total` (counter): alerts by kind
//!
//! # Design Decisions
//! - Metric updates are cheap and fire-and-forget; with no exporter
//!   installed they are no-ops, which keeps tests free of global state
//! - Exporter install failure is logged, never fatal

use metrics::{counter, gauge};
use std::net::SocketAddr;

/// Install the Prometheus exporter with its scrape endpoint on `addr`.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    let result = metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install();
    match result {
        Ok(()) => tracing::info!(address = %addr, "metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "failed to install metrics exporter"),
    }
}

/// Record one completed probe cycle and the endpoint's resulting health.
pub fn record_probe(url: &str, healthy: bool) {
    counter!("sitemon_probes_total", "url" => url.to_string()).increment(1);
    gauge!("sitemon_endpoint_up", "url" => url.to_string())
        .set(if healthy { 1.0 } else { 0.0 });
}

/// Record an emitted alert.
pub fn record_alert(kind: &'static str) {
    counter!("sitemon_alerts_total", "kind" => kind).increment(1);
}
