use crate::domain::Client;
use async_trait::async_trait;

/// Notifier is the best-effort side channel towards the client.
///
/// `send` never fails into the caller: an unreachable or misconfigured
/// channel returns `false` and is logged, not propagated as a workflow
/// error.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message via the client's preferred channel.
    async fn send(&self, client: &Client, message: &str) -> bool;
}
