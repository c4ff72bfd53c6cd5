use serde::{Deserialize, Serialize};

/// CSV row structure (flat deserialization)
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    operation: String,
    client: String,
    fund: String,
    #[serde(default)]
    amount: Option<f64>,
}

/// A single boundary operation against the workflow engine, one per CSV row.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operation {
    Subscribe(Subscribe),
    Cancel(Cancel),
}

// Custom Deserialize implementation for the CSV format
impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let row = CsvRow::deserialize(deserializer)?;
        row.try_into().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<CsvRow> for Operation {
    type Error = String;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        match row.operation.to_lowercase().as_str() {
            "subscribe" => Ok(Self::Subscribe(Subscribe {
                client_id: row.client,
                fund_id: row.fund,
                amount: row.amount,
            })),
            "cancel" => Ok(Self::Cancel(Cancel {
                client_id: row.client,
                fund_id: row.fund,
            })),
            other => Err(format!("unknown operation type: {}", other)),
        }
    }
}

impl Operation {
    pub fn client_id(&self) -> &str {
        match self {
            Operation::Subscribe(op) => &op.client_id,
            Operation::Cancel(op) => &op.client_id,
        }
    }
}

/// Subscribe a client to a fund, debiting the fund's minimum amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscribe {
    pub client_id: String,
    pub fund_id: String,
    /// Accepted for boundary compatibility; the committed amount is always
    /// the fund's minimum.
    pub amount: Option<f64>,
}

/// Cancel a client's active subscription, crediting back the frozen amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cancel {
    pub client_id: String,
    pub fund_id: String,
}
