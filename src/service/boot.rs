use crate::adapter::{
    InMemoryClientStore, InMemoryFundCatalog, InMemorySubscriptionLedger, InMemoryTransactionLog,
    LoggingNotifier,
};
use crate::domain::{Client, Fund, FundCategory};
use crate::service::SubscriptionWorkflow;
use std::sync::Arc;

/// Client provisioned for local runs.
pub const DEFAULT_CLIENT_ID: &str = "C123456";

/// The catalog every environment starts from.
pub fn default_funds() -> Vec<Fund> {
    vec![
        Fund::new("1", "FPV_EL CLIENTE_RECAUDADORA", FundCategory::Fpv, 75_000.0),
        Fund::new("2", "FPV_EL CLIENTE_ECOPETROL", FundCategory::Fpv, 125_000.0),
        Fund::new("3", "DEUDAPRIVADA", FundCategory::Fic, 50_000.0),
        Fund::new("4", "FDO-ACCIONES", FundCategory::Fic, 250_000.0),
        Fund::new("5", "FPV_EL CLIENTE_DINAMICA", FundCategory::Fpv, 100_000.0),
    ]
}

/// The wired platform: the workflow engine plus the concrete client store
/// handle the CSV boundary needs for registering clients.
pub struct Platform {
    pub clients: Arc<InMemoryClientStore>,
    pub workflow: SubscriptionWorkflow,
}

/// Set up the subscription platform on in-memory stores.
///
/// Seeds the standard fund catalog and a default client, and wires the
/// workflow engine with interface-typed handles to every collaborator:
/// client store, fund catalog, subscription ledger, transaction log and the
/// notification dispatcher.
pub async fn boot() -> Platform {
    let clients = Arc::new(InMemoryClientStore::new());
    let funds = Arc::new(InMemoryFundCatalog::with_funds(default_funds()));
    let ledger = Arc::new(InMemorySubscriptionLedger::new());
    let log = Arc::new(InMemoryTransactionLog::new());
    let notifier = Arc::new(LoggingNotifier);

    clients
        .insert(
            Client::new(DEFAULT_CLIENT_ID)
                .with_email("client@example.com")
                .with_phone("+573001234567"),
        )
        .await;

    tracing::info!("fund subscription platform initialized");

    let workflow = SubscriptionWorkflow::new(clients.clone(), funds, ledger, log, notifier);
    Platform { clients, workflow }
}
