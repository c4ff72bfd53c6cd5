use crate::domain::{Client, Operation};
use crate::service::{boot, Platform};
use std::collections::BTreeSet;
use std::fs::File;

/// Drives the workflow engine from an operations CSV file.
///
/// Stands in for the HTTP boundary in local runs: each row becomes one
/// subscribe/cancel call, and failed operations are reported per line
/// without aborting the run.
pub struct Orchestrator {
    platform: Platform,
}

impl Orchestrator {
    pub async fn new() -> Self {
        Self {
            platform: boot().await,
        }
    }

    /// Create an Orchestrator on a custom platform.
    ///
    /// ## Warning: This is NOT MEANT FOR PRODUCTION USE. Only for testing purposes.
    pub fn with_platform(platform: Platform) -> Self {
        Self { platform }
    }

    /// Process every operation in the file and return the final balance per
    /// client seen, sorted by client id.
    ///
    /// The client directory is outside the core's scope, so first sight of
    /// a client id registers it with the standard opening balance.
    pub async fn process_file(
        &self,
        file_path: &str,
    ) -> Result<Vec<(String, f64)>, Box<dyn std::error::Error>> {
        let file_handle = File::open(file_path)?;
        let mut rdr = csv::Reader::from_reader(file_handle);

        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut line_num = 0;

        for result in rdr.deserialize() {
            line_num += 1;
            let operation: Operation = result?;
            let client_id = operation.client_id().to_string();

            if seen.insert(client_id.clone())
                && self.platform.workflow.client(&client_id).await?.is_none()
            {
                self.platform.clients.insert(Client::new(&client_id)).await;
            }

            let outcome = match &operation {
                Operation::Subscribe(op) => {
                    self.platform
                        .workflow
                        .subscribe(&op.client_id, &op.fund_id, op.amount)
                        .await
                }
                Operation::Cancel(op) => {
                    self.platform.workflow.cancel(&op.client_id, &op.fund_id).await
                }
            };

            if let Err(e) = outcome {
                eprintln!("Error processing line {}: {}", line_num, e);
            }
        }

        let mut balances = Vec::with_capacity(seen.len());
        for client_id in seen {
            if let Some(client) = self.platform.workflow.client(&client_id).await? {
                balances.push((client_id, client.balance));
            }
        }
        Ok(balances)
    }

    /// Output final balances as CSV to stdout
    pub fn output_csv(balances: &[(String, f64)]) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(["client", "balance"])?;
        for (client_id, balance) in balances {
            wtr.write_record([client_id.as_str(), &format!("{:.2}", balance)])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
