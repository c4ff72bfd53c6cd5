use crate::domain::{Subscription, WorkflowError};
use async_trait::async_trait;

/// SubscriptionLedger holds one record per (client, fund) pair.
///
/// Writes are conditional on the record's current status, so concurrent
/// subscribe/cancel requests for the same pair are rejected instead of
/// silently corrupting state.
#[async_trait]
pub trait SubscriptionLedger: Send + Sync {
    async fn find(
        &self,
        client_id: &str,
        fund_id: &str,
    ) -> Result<Option<Subscription>, WorkflowError>;

    /// Persist a fresh ACTIVE record for its (client, fund) pair.
    ///
    /// Conditional write: fails with `AlreadySubscribed` when an ACTIVE
    /// record already exists. A CANCELLED record is overwritten, the
    /// logical replacement on re-subscribe.
    async fn put_active(&self, subscription: Subscription) -> Result<(), WorkflowError>;

    /// Flip an ACTIVE record to CANCELLED, leaving every other field
    /// untouched, and return the updated record.
    ///
    /// Conditional write: fails with `NotSubscribed` when the record is
    /// absent or not currently ACTIVE.
    async fn mark_cancelled(
        &self,
        client_id: &str,
        fund_id: &str,
    ) -> Result<Subscription, WorkflowError>;

    /// All ACTIVE records for a client.
    async fn active_for_client(&self, client_id: &str)
        -> Result<Vec<Subscription>, WorkflowError>;
}
