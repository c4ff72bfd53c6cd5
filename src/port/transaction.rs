use crate::domain::{Transaction, WorkflowError};
use async_trait::async_trait;

/// TransactionLog is the append-only record of every money movement.
#[async_trait]
pub trait TransactionLog: Send + Sync {
    /// Append a transaction. Records are never mutated or deleted once
    /// written.
    async fn append(&self, transaction: Transaction) -> Result<(), WorkflowError>;

    /// The `limit` most recent transactions for a client, ordered by
    /// transaction date descending.
    async fn recent(
        &self,
        client_id: &str,
        limit: usize,
    ) -> Result<Vec<Transaction>, WorkflowError>;
}
