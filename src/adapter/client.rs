use crate::domain::{Client, ClientUpdate, WorkflowError};
use crate::port::ClientStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory client directory.
///
/// Balance deltas are applied under the write lock, so concurrent updates to
/// the same client never lose writes. For production, use a database-backed
/// implementation with an atomic increment.
pub struct InMemoryClientStore {
    clients: Arc<RwLock<HashMap<String, Client>>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a client. Client creation is otherwise outside the core's
    /// scope.
    pub async fn insert(&self, client: Client) {
        self.clients
            .write()
            .await
            .insert(client.client_id.clone(), client);
    }
}

impl Default for InMemoryClientStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn get(&self, client_id: &str) -> Result<Option<Client>, WorkflowError> {
        Ok(self.clients.read().await.get(client_id).cloned())
    }

    async fn apply_balance_delta(
        &self,
        client_id: &str,
        delta: f64,
    ) -> Result<Client, WorkflowError> {
        let mut clients = self.clients.write().await;
        let client = clients.get_mut(client_id).ok_or(WorkflowError::NotFound)?;
        client.balance += delta;
        Ok(client.clone())
    }

    async fn update_contact(
        &self,
        client_id: &str,
        update: ClientUpdate,
    ) -> Result<Option<Client>, WorkflowError> {
        let mut clients = self.clients.write().await;
        let Some(client) = clients.get_mut(client_id) else {
            return Ok(None);
        };
        if let Some(channel) = update.preferred_notification {
            client.preferred_notification = channel;
        }
        if let Some(email) = update.email {
            client.email = Some(email);
        }
        if let Some(phone) = update.phone {
            client.phone = Some(phone);
        }
        Ok(Some(client.clone()))
    }
}
