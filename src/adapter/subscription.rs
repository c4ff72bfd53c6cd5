use crate::domain::{Subscription, SubscriptionStatus, WorkflowError};
use crate::port::SubscriptionLedger;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory subscription ledger keyed by (client, fund).
///
/// Both write paths check the record's current status under the write lock,
/// which gives the conditional-write semantics the port requires.
pub struct InMemorySubscriptionLedger {
    records: Arc<RwLock<HashMap<(String, String), Subscription>>>,
}

impl InMemorySubscriptionLedger {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySubscriptionLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriptionLedger for InMemorySubscriptionLedger {
    async fn find(
        &self,
        client_id: &str,
        fund_id: &str,
    ) -> Result<Option<Subscription>, WorkflowError> {
        let records = self.records.read().await;
        Ok(records
            .get(&(client_id.to_string(), fund_id.to_string()))
            .cloned())
    }

    async fn put_active(&self, subscription: Subscription) -> Result<(), WorkflowError> {
        let mut records = self.records.write().await;
        let key = (
            subscription.client_id.clone(),
            subscription.fund_id.clone(),
        );
        if records.get(&key).is_some_and(|s| s.is_active()) {
            return Err(WorkflowError::AlreadySubscribed);
        }
        records.insert(key, subscription);
        Ok(())
    }

    async fn mark_cancelled(
        &self,
        client_id: &str,
        fund_id: &str,
    ) -> Result<Subscription, WorkflowError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&(client_id.to_string(), fund_id.to_string()))
            .filter(|s| s.is_active())
            .ok_or(WorkflowError::NotSubscribed)?;
        record.status = SubscriptionStatus::Cancelled;
        Ok(record.clone())
    }

    async fn active_for_client(
        &self,
        client_id: &str,
    ) -> Result<Vec<Subscription>, WorkflowError> {
        let records = self.records.read().await;
        let mut active: Vec<Subscription> = records
            .values()
            .filter(|s| s.client_id == client_id && s.is_active())
            .cloned()
            .collect();
        active.sort_by(|a, b| a.fund_id.cmp(&b.fund_id));
        Ok(active)
    }
}
