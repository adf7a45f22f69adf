use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;

const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Best-effort outbound notifications via the Telegram Bot API.
///
/// Handlers hand messages to a background worker over a channel, so a slow
/// or failing endpoint can never delay or change a CRUD response. When the
/// bot credentials are unset the notifier is disabled and `send` is a
/// no-op, which also serves as the test double.
#[derive(Clone)]
pub struct Notifier {
    tx: Option<mpsc::UnboundedSender<String>>,
}

impl Notifier {
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Spawn the delivery worker, or return a disabled notifier when the
    /// credentials are missing.
    pub fn spawn(bot_token: Option<String>, chat_id: Option<String>) -> Self {
        let (bot_token, chat_id) = match (bot_token, chat_id) {
            (Some(t), Some(c)) if !t.is_empty() && !c.is_empty() => (t, c),
            _ => {
                tracing::warn!("Telegram config missing, notifications disabled");
                return Self::disabled();
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(delivery_worker(rx, bot_token, chat_id));

        Self { tx: Some(tx) }
    }

    pub fn send(&self, message: impl Into<String>) {
        let message = message.into();
        match &self.tx {
            Some(tx) => {
                if tx.send(message).is_err() {
                    tracing::warn!("Notification worker gone, message dropped");
                }
            }
            None => tracing::debug!(message = %message, "Notification skipped (disabled)"),
        }
    }
}

async fn delivery_worker(
    mut rx: mpsc::UnboundedReceiver<String>,
    bot_token: String,
    chat_id: String,
) {
    let client = match reqwest::Client::builder().timeout(SEND_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Notification worker failed to build HTTP client");
            return;
        }
    };

    let url = format!("https://api.telegram.org/bot{bot_token}/sendMessage");

    while let Some(message) = rx.recv().await {
        if let Err(e) = deliver(&client, &url, &chat_id, &message).await {
            tracing::warn!(error = %e, "Telegram notification failed");
        }
    }
}

async fn deliver(
    client: &reqwest::Client,
    url: &str,
    chat_id: &str,
    text: &str,
) -> Result<(), reqwest::Error> {
    client
        .post(url)
        .json(&json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        }))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_notifier_send_is_noop() {
        let notifier = Notifier::disabled();
        notifier.send("nobody is listening");
    }

    #[tokio::test]
    async fn test_missing_credentials_disable_notifier() {
        let notifier = Notifier::spawn(Some("token".into()), None);
        assert!(notifier.tx.is_none());

        let notifier = Notifier::spawn(Some(String::new()), Some("42".into()));
        assert!(notifier.tx.is_none());
    }
}
