//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every monitored endpoint is an absolute http(s) URL
//! - Validate value ranges (poll interval > 0)
//! - Check notification credentials when delivery is enabled
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::MonitorConfig;
use thiserror::Error;
use url::Url;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No endpoints configured; the monitor would have nothing to do.
    #[error("no endpoints configured")]
    NoEndpoints,

    /// Endpoint is not an absolute http(s) URL.
    #[error("endpoint {index} ({url:?}) is not an absolute http(s) URL")]
    InvalidEndpoint { index: usize, url: String },

    /// Poll interval must be non-zero.
    #[error("poll interval must be greater than zero")]
    ZeroInterval,

    /// Probe timeout must be non-zero.
    #[error("probe timeout must be greater than zero")]
    ZeroProbeTimeout,

    /// Telegram delivery enabled without a bot token.
    #[error("notification enabled but bot_token is empty")]
    MissingBotToken,

    /// Telegram delivery enabled without a chat id.
    #[error("notification enabled but chat_id is unset")]
    MissingChatId,
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.endpoints.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }
    for (index, endpoint) in config.endpoints.iter().enumerate() {
        if !is_absolute_http_url(endpoint) {
            errors.push(ValidationError::InvalidEndpoint {
                index,
                url: endpoint.clone(),
            });
        }
    }

    if config.poll.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.poll.probe_timeout_secs == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    }

    if config.notification.enabled {
        if config.notification.bot_token.is_empty() {
            errors.push(ValidationError::MissingBotToken);
        }
        if config.notification.chat_id == 0 {
            errors.push(ValidationError::MissingChatId);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// True if `raw` parses as an absolute URL with an http(s) scheme and a host.
fn is_absolute_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
