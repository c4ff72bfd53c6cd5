use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure taxonomy of the subscription workflow.
///
/// Validation failures are structured results the boundary maps to a client
/// error response; `StoreUnavailable` is an infrastructure fault on one of
/// the backing collections.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkflowError {
    #[error("client or fund not found")]
    NotFound,
    #[error("no available balance to subscribe to fund {fund}")]
    InsufficientFunds { fund: String },
    #[error("already subscribed to this fund")]
    AlreadySubscribed,
    #[error("not subscribed to this fund")]
    NotSubscribed,
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl WorkflowError {
    /// Machine status tag carried by every failure, consistent between
    /// subscribe and cancel.
    pub fn status(&self) -> &'static str {
        "FAILED"
    }

    /// Status code for the consuming HTTP boundary: workflow failures map
    /// to 400, infrastructure faults to 503.
    pub fn http_status(&self) -> u16 {
        match self {
            WorkflowError::StoreUnavailable(_) => 503,
            _ => 400,
        }
    }

    /// The `{error, status}` body returned to callers on any failure path.
    pub fn report(&self) -> FailureReport {
        FailureReport {
            error: self.to_string(),
            status: self.status().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureReport {
    pub error: String,
    pub status: String,
}
