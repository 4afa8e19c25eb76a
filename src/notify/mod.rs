//! Notification delivery subsystem.
//!
//! # Data Flow
//! ```text
//! Decision engine emits Alert
//!     → rendered to text by the poller
//!     → Notifier::send (Telegram when configured, log otherwise)
//!     → delivery failures logged at warn and swallowed
//! ```
//!
//! # Design Decisions
//! - Object-safe trait returning a boxed future so pollers hold one
//!   `Arc<dyn Notifier>` regardless of the concrete sink
//! - Implementations must be safe for concurrent use from multiple pollers
//! - Delivery failure is never fatal to a polling loop

pub mod log;
pub mod telegram;

use crate::config::NotificationConfig;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

pub use log::LogNotifier;
pub use telegram::TelegramNotifier;

/// Boxed delivery future, tied to the notifier's lifetime.
pub type SendFuture<'a> = Pin<Box<dyn Future<Output = Result<(), NotifyError>> + Send + 'a>>;

/// Error type for alert delivery.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Request to the delivery backend failed at the transport level.
    #[error("delivery transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Delivery backend rejected the message.
    #[error("delivery rejected with status {status}: {body}")]
    Api { status: u16, body: String },
}

/// An outbound sink for human-readable alert messages.
pub trait Notifier: Send + Sync {
    fn send(&self, message: String) -> SendFuture<'_>;
}

/// Build the configured sink: Telegram when enabled, log-only otherwise.
pub fn from_config(config: &NotificationConfig) -> Arc<dyn Notifier> {
    if config.enabled {
        Arc::new(TelegramNotifier::new(
            config.bot_token.clone(),
            config.chat_id,
        ))
    } else {
        tracing::info!("notification delivery disabled, alerts go to the log");
        Arc::new(LogNotifier)
    }
}
