//! Telegram Bot API sink.

use crate::notify::{Notifier, NotifyError, SendFuture};
use serde_json::json;

/// Delivers alerts to a Telegram chat via the Bot API `sendMessage` call.
pub struct TelegramNotifier {
    client: reqwest::Client,
    token: String,
    chat_id: i64,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: i64) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            chat_id,
        }
    }
}

impl Notifier for TelegramNotifier {
    fn send(&self, message: String) -> SendFuture<'_> {
        Box::pin(async move {
            let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
            let response = self
                .client
                .post(&url)
                .json(&json!({
                    "chat_id": self.chat_id,
                    "text": message,
                }))
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                let body = response.text().await.unwrap_or_default();
                Err(NotifyError::Api {
                    status: status.as_u16(),
                    body,
                })
            }
        })
    }
}
