use serde::{Deserialize, Serialize};

/// Opening balance every client starts from when provisioned locally.
pub const DEFAULT_OPENING_BALANCE: f64 = 500_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Sms,
}

/// A client of the platform: a cash balance plus contact preferences.
///
/// The balance is only ever mutated through signed delta application by the
/// workflow engine, never set directly. Clients are created outside the core
/// and never deleted by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: String,
    pub balance: f64,
    pub preferred_notification: NotificationChannel,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Client {
    /// New client with the standard opening balance and email delivery.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            balance: DEFAULT_OPENING_BALANCE,
            preferred_notification: NotificationChannel::Email,
            email: None,
            phone: None,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_channel(mut self, channel: NotificationChannel) -> Self {
        self.preferred_notification = channel;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Partial contact/preference update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    #[serde(default)]
    pub preferred_notification: Option<NotificationChannel>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}
