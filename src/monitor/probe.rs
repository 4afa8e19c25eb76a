//! HTTP probe invoker.
//!
//! # Responsibilities
//! - Issue one bounded-timeout GET per poll cycle
//! - Reduce the response to {status, body length} or a transport-failure
//!   sentinel
//!
//! # Design Decisions
//! - The per-call timeout is set on the client and is independent of the
//!   poll interval
//! - A non-2xx status is a completed probe, not a failure; only
//!   transport-level errors map to Unreachable
//! - The body is read fully and counted, rather than trusting the
//!   Content-Length header
//! - No shared state is touched here; the caller merges the outcome

use crate::monitor::engine::ProbeOutcome;
use std::time::Duration;

/// Issues probes against monitored endpoints.
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    /// Build a prober whose requests time out after `timeout`.
    ///
    /// Client construction failure is a startup precondition violation and
    /// is propagated as fatal.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sitemon/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Probe `url` once.
    ///
    /// Never retries within a cycle; the next scheduled tick is the only
    /// retry mechanism.
    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    tracing::warn!(url, "probe timed out");
                } else {
                    tracing::warn!(url, error = %e, "probe failed: transport error");
                }
                return ProbeOutcome::Unreachable;
            }
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(body) => ProbeOutcome::Response {
                status,
                length: body.len() as i64,
            },
            Err(e) => {
                tracing::warn!(url, error = %e, "probe failed: could not read body");
                ProbeOutcome::Unreachable
            }
        }
    }
}
