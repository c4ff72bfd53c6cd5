use crate::domain::{Fund, WorkflowError};
use async_trait::async_trait;

/// FundCatalog holds the static fund metadata. Read-only from the
/// workflow's perspective.
#[async_trait]
pub trait FundCatalog: Send + Sync {
    async fn get(&self, fund_id: &str) -> Result<Option<Fund>, WorkflowError>;

    /// All funds available for subscription.
    async fn list_all(&self) -> Result<Vec<Fund>, WorkflowError>;
}
