use crate::domain::{Client, NotificationChannel};
use crate::port::Notifier;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Resolved delivery target for a client's preferred channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Email(String),
    Sms(String),
}

impl Delivery {
    /// Pick the target matching the client's preference; `None` when the
    /// required contact detail is missing.
    pub fn for_client(client: &Client) -> Option<Self> {
        match client.preferred_notification {
            NotificationChannel::Email => client.email.clone().map(Delivery::Email),
            NotificationChannel::Sms => client.phone.clone().map(Delivery::Sms),
        }
    }
}

/// Notifier that writes deliveries to the log, standing in for the email
/// and SMS gateways.
pub struct LoggingNotifier;

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn send(&self, client: &Client, message: &str) -> bool {
        match Delivery::for_client(client) {
            Some(Delivery::Email(email)) => {
                tracing::info!(%email, message, "email sent");
                true
            }
            Some(Delivery::Sms(phone)) => {
                tracing::info!(%phone, message, "sms sent");
                true
            }
            None => {
                tracing::warn!(
                    client_id = %client.client_id,
                    "cannot notify client: missing contact details"
                );
                false
            }
        }
    }
}

/// Notifier that records every delivery instead of sending it. Used by
/// tests to assert on the side channel.
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<(Delivery, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn sent(&self) -> Vec<(Delivery, String)> {
        self.sent.read().await.clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, client: &Client, message: &str) -> bool {
        match Delivery::for_client(client) {
            Some(delivery) => {
                self.sent.write().await.push((delivery, message.to_string()));
                true
            }
            None => false,
        }
    }
}
