//! Log-only sink, used when outbound delivery is disabled.

use crate::notify::{Notifier, SendFuture};

/// Writes alert messages to the log and always succeeds.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, message: String) -> SendFuture<'_> {
        Box::pin(async move {
            tracing::warn!(alert = %message, "alert");
            Ok(())
        })
    }
}
