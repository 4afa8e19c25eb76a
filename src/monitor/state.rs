//! Per-endpoint state and the shared state store.
//!
//! # Responsibilities
//! - Hold the settled and just-observed status/length per URL
//! - Track the consecutive-failure counter
//! - Serialize all reads and writes through one reader/writer lock
//!
//! # Design Decisions
//! - The store is an owned, injectable value, not a process global
//! - State is created lazily on the first probe of a URL and never evicted;
//!   the endpoint set is fixed for the process lifetime
//! - Lookups on never-probed URLs are a recoverable NotFound, meaning
//!   "insufficient data yet", never a fatal condition
//! - The lock is shared across all URLs; critical sections are short and
//!   never held across an await point

use crate::monitor::engine::{self, Alert, ProbeOutcome};
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Status value before the first probe completes.
pub const STATUS_UNKNOWN: i32 = -1;

/// The settled success status.
pub const STATUS_OK: i32 = 200;

/// Sentinel recorded when the probe could not complete at the transport
/// level. Distinct in meaning from a real upstream 503, but shares its value
/// so "unreachable" reads as service-unavailable downstream.
pub const STATUS_UNREACHABLE: i32 = 503;

/// Length value meaning "no baseline adopted yet".
pub const LENGTH_UNSET: i64 = -1;

/// Mutable record tracked for one monitored URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointState {
    /// Just-observed status, or [`STATUS_UNKNOWN`] / [`STATUS_UNREACHABLE`].
    pub current_status: i32,

    /// Last status the decision engine settled on. Starts at
    /// [`STATUS_OK`] so a first-ever failure registers as a transition.
    pub previous_status: i32,

    /// Body byte count of the last probe.
    pub current_length: i64,

    /// Settled body-length baseline, [`LENGTH_UNSET`] until the first
    /// steady success adopts one.
    pub previous_length: i64,

    /// Length of the current unbroken run of non-success outcomes.
    pub consecutive_failures: u32,
}

impl EndpointState {
    /// State of a URL that has never been probed.
    pub fn new() -> Self {
        Self {
            current_status: STATUS_UNKNOWN,
            previous_status: STATUS_OK,
            current_length: LENGTH_UNSET,
            previous_length: LENGTH_UNSET,
            consecutive_failures: 0,
        }
    }
}

impl Default for EndpointState {
    fn default() -> Self {
        Self::new()
    }
}

/// Error type for state lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// The URL has never been probed.
    #[error("no probe state recorded for {0}")]
    NotFound(String),
}

/// Concurrent URL → [`EndpointState`] map.
///
/// Written by exactly one poller per URL, read by status-check helpers from
/// any task.
#[derive(Debug, Default)]
pub struct StateStore {
    inner: RwLock<HashMap<String, EndpointState>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a probe outcome into the endpoint's state and return the alerts
    /// the decision engine fired. Creates the state lazily on first probe.
    ///
    /// The engine runs inside the write-lock scope, so no reader observes an
    /// intermediate state.
    pub fn record(&self, url: &str, outcome: &ProbeOutcome, drift_enabled: bool) -> Vec<Alert> {
        let mut map = self.inner.write().expect("state store lock poisoned");
        let state = map.entry(url.to_string()).or_default();
        engine::apply(url, state, outcome, drift_enabled)
    }

    /// Snapshot of the state for one URL.
    pub fn get(&self, url: &str) -> Result<EndpointState, StateError> {
        let map = self.inner.read().expect("state store lock poisoned");
        map.get(url)
            .cloned()
            .ok_or_else(|| StateError::NotFound(url.to_string()))
    }

    /// Whether the last probe of `url` was a settled success.
    pub fn is_ok(&self, url: &str) -> Result<bool, StateError> {
        Ok(self.get(url)?.current_status == STATUS_OK)
    }

    /// Body length observed by the last probe of `url`.
    pub fn content_length(&self, url: &str) -> Result<i64, StateError> {
        Ok(self.get(url)?.current_length)
    }
}
