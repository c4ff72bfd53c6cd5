use crate::domain::{Client, ClientUpdate, WorkflowError};
use async_trait::async_trait;

/// ClientStore is the client directory: cash balance plus contact
/// preferences.
///
/// Reads keep "does not exist" (`Ok(None)`) distinct from an infrastructure
/// fault (`Err`); callers decide which of the two they can tolerate.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn get(&self, client_id: &str) -> Result<Option<Client>, WorkflowError>;

    /// Apply a signed delta to the client's balance and return the updated
    /// record.
    ///
    /// Must be atomic with respect to concurrent deltas on the same client:
    /// a single increment/decrement at the store, never a read-modify-write
    /// performed by the caller.
    async fn apply_balance_delta(
        &self,
        client_id: &str,
        delta: f64,
    ) -> Result<Client, WorkflowError>;

    /// Partial update of contact details and the preferred channel.
    async fn update_contact(
        &self,
        client_id: &str,
        update: ClientUpdate,
    ) -> Result<Option<Client>, WorkflowError>;
}
