//! Alert decision engine.
//!
//! # State Transitions
//! ```text
//! Failing (non-200 or unreachable):
//!     counter increments each cycle; Down alert fires exactly when the
//!     counter first reaches DOWN_THRESHOLD
//! Recovery (settled 200 after a failing run):
//!     Up alert fires only if the run's counter exceeded DOWN_THRESHOLD - 1;
//!     counter resets to 0
//! Steady success:
//!     optional content-length drift check against the settled baseline
//! ```
//!
//! # Design Decisions
//! - Threshold of 3 skips single transient failures while bounding
//!   detection latency to three poll intervals
//! - A distinct second failing status inside an unbroken failing run keeps
//!   incrementing the same counter; counting resets only through the
//!   success branch
//! - Drift alerts are independent of the up/down alert stream

use crate::monitor::state::{EndpointState, LENGTH_UNSET, STATUS_OK, STATUS_UNREACHABLE};
use std::fmt;

/// Consecutive failures before an endpoint is declared down.
pub const DOWN_THRESHOLD: u32 = 3;

/// Result of one probe cycle, as seen by the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The request completed with an HTTP response. A non-2xx status is a
    /// completed probe, not a failure.
    Response { status: u16, length: i64 },

    /// Transport-level failure: connection refused, timeout, or the body
    /// could not be read.
    Unreachable,
}

/// A state change worth telling a human about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// The endpoint crossed the consecutive-failure threshold.
    Down { url: String, status: i32 },

    /// The endpoint returned to a settled success after a down episode.
    Up { url: String },

    /// Two consecutive successful probes returned different body lengths.
    ContentChanged { url: String },

    /// The monitoring service itself is shutting down.
    Stopping,
}

impl Alert {
    /// Short label used for logging and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Alert::Down { .. } => "down",
            Alert::Up { .. } => "up",
            Alert::ContentChanged { .. } => "content_changed",
            Alert::Stopping => "stopping",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::Down { url, status } => write!(
                f,
                "Endpoint down: {url} (status {status}, {DOWN_THRESHOLD} consecutive failures)"
            ),
            Alert::Up { url } => write!(f, "Endpoint recovered: {url}"),
            Alert::ContentChanged { url } => {
                write!(f, "Content length changed for {url}")
            }
            Alert::Stopping => write!(f, "Monitoring service stopping"),
        }
    }
}

/// Merge one probe outcome into the endpoint state and decide which alerts
/// fire. Must run inside the state store's write lock; callers never observe
/// an intermediate state.
pub fn apply(
    url: &str,
    state: &mut EndpointState,
    outcome: &ProbeOutcome,
    drift_enabled: bool,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    match *outcome {
        ProbeOutcome::Response { status, length } => {
            state.current_status = i32::from(status);
            state.current_length = length;
        }
        ProbeOutcome::Unreachable => {
            state.current_status = STATUS_UNREACHABLE;
            state.current_length = 0;
        }
    }

    let settled_ok = state.current_status == STATUS_OK;

    if !settled_ok
        && (state.previous_status != state.current_status || state.consecutive_failures > 0)
    {
        state.previous_status = state.current_status;
        state.consecutive_failures += 1;
        if state.consecutive_failures == DOWN_THRESHOLD {
            alerts.push(Alert::Down {
                url: url.to_string(),
                status: state.current_status,
            });
        }
    } else if state.previous_status != state.current_status {
        // Transition back to success.
        state.previous_status = state.current_status;
        if state.consecutive_failures > DOWN_THRESHOLD - 1 {
            alerts.push(Alert::Up {
                url: url.to_string(),
            });
        }
        state.consecutive_failures = 0;
    } else if settled_ok && drift_enabled {
        // Steady success: evaluate content-length drift.
        if state.previous_length == LENGTH_UNSET {
            state.previous_length = state.current_length;
        } else if state.current_length != state.previous_length {
            alerts.push(Alert::ContentChanged {
                url: url.to_string(),
            });
            state.previous_length = state.current_length;
        }
    }

    alerts
}
