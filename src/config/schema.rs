//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the endpoint monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Polling cadence and probe timeout.
    pub poll: PollConfig,

    /// Absolute URLs to monitor. One poller task is started per entry.
    pub endpoints: Vec<String>,

    /// Content-length drift detection settings.
    pub content_drift: ContentDriftConfig,

    /// Notification delivery settings.
    pub notification: NotificationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Polling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between probes of the same endpoint.
    pub interval_secs: u64,

    /// Per-probe timeout in seconds, independent of the poll interval.
    pub probe_timeout_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: 5,
            probe_timeout_secs: 30,
        }
    }
}

impl PollConfig {
    /// Poll interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Probe timeout as a [`Duration`].
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

/// Content-length drift detection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentDriftConfig {
    /// Alert when the body length of two consecutive successful probes
    /// differs.
    pub enabled: bool,
}

impl Default for ContentDriftConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Notification delivery configuration.
///
/// When disabled, alerts are written to the log instead of an external sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Enable Telegram delivery.
    pub enabled: bool,

    /// Telegram bot token.
    pub bot_token: String,

    /// Telegram chat to deliver alerts to.
    pub chat_id: i64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bot_token: String::new(),
            chat_id: 0,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
