use crate::domain::{Transaction, WorkflowError};
use crate::port::TransactionLog;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory append-only transaction log, indexed by client.
pub struct InMemoryTransactionLog {
    by_client: Arc<RwLock<HashMap<String, Vec<Transaction>>>>,
}

impl InMemoryTransactionLog {
    pub fn new() -> Self {
        Self {
            by_client: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryTransactionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionLog for InMemoryTransactionLog {
    async fn append(&self, transaction: Transaction) -> Result<(), WorkflowError> {
        let mut by_client = self.by_client.write().await;
        by_client
            .entry(transaction.client_id.clone())
            .or_default()
            .push(transaction);
        Ok(())
    }

    async fn recent(
        &self,
        client_id: &str,
        limit: usize,
    ) -> Result<Vec<Transaction>, WorkflowError> {
        let by_client = self.by_client.read().await;
        let Some(entries) = by_client.get(client_id) else {
            return Ok(Vec::new());
        };
        // Newest first; the stable sort keeps the later append ahead among
        // equal timestamps.
        let mut recent: Vec<Transaction> = entries.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
        recent.truncate(limit);
        Ok(recent)
    }
}
