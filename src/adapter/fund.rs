use crate::domain::{Fund, WorkflowError};
use crate::port::FundCatalog;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory fund catalog, keyed by fund id.
pub struct InMemoryFundCatalog {
    funds: Arc<RwLock<HashMap<String, Fund>>>,
}

impl InMemoryFundCatalog {
    pub fn new() -> Self {
        Self {
            funds: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_funds(funds: Vec<Fund>) -> Self {
        let map = funds
            .into_iter()
            .map(|fund| (fund.fund_id.clone(), fund))
            .collect();
        Self {
            funds: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace a fund entry. The workflow itself never writes
    /// here; this is for seeding and for catalog maintenance outside the
    /// core.
    pub async fn insert(&self, fund: Fund) {
        self.funds.write().await.insert(fund.fund_id.clone(), fund);
    }
}

impl Default for InMemoryFundCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FundCatalog for InMemoryFundCatalog {
    async fn get(&self, fund_id: &str) -> Result<Option<Fund>, WorkflowError> {
        Ok(self.funds.read().await.get(fund_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Fund>, WorkflowError> {
        let funds = self.funds.read().await;
        let mut all: Vec<Fund> = funds.values().cloned().collect();
        all.sort_by(|a, b| a.fund_id.cmp(&b.fund_id));
        Ok(all)
    }
}
