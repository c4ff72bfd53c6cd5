use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
}

/// The relationship record linking one client to one fund.
///
/// At most one ACTIVE record exists per (client, fund) pair at any time, and
/// status only ever moves ACTIVE -> CANCELLED. Re-subscribing writes a fresh
/// ACTIVE record that logically replaces the cancelled one for the pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub subscription_id: String,
    pub client_id: String,
    pub fund_id: String,
    /// The fund's minimum amount at subscription time, frozen for the
    /// lifetime of the record. Cancellation refunds this amount even when
    /// the fund's minimum has changed since.
    pub amount_subscribed: f64,
    pub status: SubscriptionStatus,
    pub subscription_date: DateTime<Utc>,
}

impl Subscription {
    /// Fresh ACTIVE record with a generated id, dated now.
    pub fn open(client_id: &str, fund_id: &str, amount: f64) -> Self {
        Self {
            subscription_id: Uuid::new_v4().to_string(),
            client_id: client_id.to_string(),
            fund_id: fund_id.to_string(),
            amount_subscribed: amount,
            status: SubscriptionStatus::Active,
            subscription_date: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, SubscriptionStatus::Active)
    }
}

/// Subscription enriched with the fund's display name for read paths. The
/// name is absent when the fund could not be resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionView {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub fund_name: Option<String>,
}
