use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Subscription,
    Cancellation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Completed,
    Failed,
}

/// Immutable record of a money movement tied to a subscribe/cancel action.
///
/// A transaction is written only after the balance mutation it records has
/// been applied, and is never mutated or deleted once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    pub client_id: String,
    pub fund_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub transaction_date: DateTime<Utc>,
    pub status: TransactionStatus,
}

impl Transaction {
    fn record(client_id: &str, fund_id: &str, kind: TransactionKind, amount: f64) -> Self {
        Self {
            transaction_id: Uuid::new_v4().to_string(),
            client_id: client_id.to_string(),
            fund_id: fund_id.to_string(),
            kind,
            amount,
            transaction_date: Utc::now(),
            status: TransactionStatus::Completed,
        }
    }

    /// Completed debit recorded at subscribe time.
    pub fn subscription(client_id: &str, fund_id: &str, amount: f64) -> Self {
        Self::record(client_id, fund_id, TransactionKind::Subscription, amount)
    }

    /// Completed credit recorded at cancel time.
    pub fn cancellation(client_id: &str, fund_id: &str, amount: f64) -> Self {
        Self::record(client_id, fund_id, TransactionKind::Cancellation, amount)
    }
}

/// Transaction enriched with the fund's display name, as returned to the
/// caller from subscribe/cancel and from the history read path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub fund_name: Option<String>,
}
