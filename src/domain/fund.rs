use serde::{Deserialize, Serialize};

/// Regulatory class of a fund. Opaque to the workflow beyond being a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundCategory {
    #[serde(rename = "FPV")]
    Fpv,
    #[serde(rename = "FIC")]
    Fic,
}

/// Static fund metadata: display name, class and the minimum subscription
/// amount. Read-only reference data from the workflow's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub fund_id: String,
    pub name: String,
    pub category: FundCategory,
    pub minimum_amount: f64,
}

impl Fund {
    pub fn new(
        fund_id: impl Into<String>,
        name: impl Into<String>,
        category: FundCategory,
        minimum_amount: f64,
    ) -> Self {
        Self {
            fund_id: fund_id.into(),
            name: name.into(),
            category,
            minimum_amount,
        }
    }
}
