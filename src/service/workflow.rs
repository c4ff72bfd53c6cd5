use crate::domain::{
    Client, ClientUpdate, Fund, Subscription, SubscriptionView, Transaction, TransactionView,
    WorkflowError,
};
use crate::port::{ClientStore, FundCatalog, Notifier, SubscriptionLedger, TransactionLog};
use std::sync::Arc;

/// The subscription workflow engine.
///
/// A stateless orchestrator over the four backing collections plus the
/// notification side channel. It holds no data between calls; every
/// collaborator is an interface-typed handle injected at construction, so
/// tests substitute in-memory fakes.
///
/// There is no multi-record transaction across the collections: each
/// operation is a fixed-order sequence of single-shot calls, and a failure
/// partway through leaves the earlier steps applied. The orderings below
/// are chosen so that a visible transaction record always implies the
/// balance change behind it has been applied.
#[derive(Clone)]
pub struct SubscriptionWorkflow {
    clients: Arc<dyn ClientStore>,
    funds: Arc<dyn FundCatalog>,
    ledger: Arc<dyn SubscriptionLedger>,
    log: Arc<dyn TransactionLog>,
    notifier: Arc<dyn Notifier>,
}

impl SubscriptionWorkflow {
    pub fn new(
        clients: Arc<dyn ClientStore>,
        funds: Arc<dyn FundCatalog>,
        ledger: Arc<dyn SubscriptionLedger>,
        log: Arc<dyn TransactionLog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            clients,
            funds,
            ledger,
            log,
            notifier,
        }
    }

    /// Subscribe a client to a fund, debiting the fund's minimum amount.
    ///
    /// The debit happens before the ledger and log writes: an observer
    /// never sees a recorded transaction whose balance change has not been
    /// applied. A duplicate rejected at the conditional ledger write gets
    /// the debit credited back; a crash or store fault between the debit
    /// and the writes still leaves the balance mutated with no record, an
    /// accepted inconsistency window.
    pub async fn subscribe(
        &self,
        client_id: &str,
        fund_id: &str,
        requested_amount: Option<f64>,
    ) -> Result<TransactionView, WorkflowError> {
        // 1. Resolve both collaborating records; either one missing is
        //    NotFound
        let client = self
            .clients
            .get(client_id)
            .await?
            .ok_or(WorkflowError::NotFound)?;
        let fund = self
            .funds
            .get(fund_id)
            .await?
            .ok_or(WorkflowError::NotFound)?;

        // The committed amount is always the fund's current minimum; a
        // client-supplied amount is accepted but never overrides it.
        if let Some(requested) = requested_amount {
            if requested != fund.minimum_amount {
                tracing::debug!(
                    client_id,
                    fund_id,
                    requested,
                    committed = fund.minimum_amount,
                    "requested amount ignored in favor of the fund minimum"
                );
            }
        }

        // 2. Balance gate; nothing has been mutated yet
        if client.balance < fund.minimum_amount {
            return Err(WorkflowError::InsufficientFunds {
                fund: fund.name.clone(),
            });
        }

        // 3. Pre-check for an existing ACTIVE subscription. A failed lookup
        //    is treated as "not currently subscribed" - availability over
        //    caution; the conditional put below still guards the write.
        match self.ledger.find(client_id, fund_id).await {
            Ok(Some(existing)) if existing.is_active() => {
                return Err(WorkflowError::AlreadySubscribed);
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(
                    client_id,
                    fund_id,
                    error = %err,
                    "subscription pre-check failed; proceeding as not subscribed"
                );
            }
        }

        // 4/5. Fresh records, amount frozen at the current minimum
        let subscription = Subscription::open(client_id, fund_id, fund.minimum_amount);
        let transaction = Transaction::subscription(client_id, fund_id, fund.minimum_amount);

        // 6. Debit first, then record. Later failures do not roll this
        //    back.
        self.clients
            .apply_balance_delta(client_id, -fund.minimum_amount)
            .await?;

        // 7. Conditional write: a concurrent subscribe for the same pair
        //    loses here instead of producing a second ACTIVE record. The
        //    rejection is a validation failure, so the debit above is
        //    credited back before returning.
        if let Err(err) = self.ledger.put_active(subscription).await {
            if err == WorkflowError::AlreadySubscribed {
                if let Err(refund_err) = self
                    .clients
                    .apply_balance_delta(client_id, fund.minimum_amount)
                    .await
                {
                    tracing::warn!(
                        client_id,
                        fund_id,
                        error = %refund_err,
                        "compensating credit failed after a rejected subscription write"
                    );
                }
            }
            return Err(err);
        }
        self.log.append(transaction.clone()).await?;

        // 8. Best-effort; delivery failure never alters the outcome
        self.notify(
            &client,
            &format!("You have successfully subscribed to fund {}", fund.name),
        )
        .await;

        Ok(TransactionView {
            transaction,
            fund_name: Some(fund.name),
        })
    }

    /// Cancel an active subscription, crediting back the amount frozen at
    /// subscribe time - not the fund's current minimum, which may have
    /// changed since.
    pub async fn cancel(
        &self,
        client_id: &str,
        fund_id: &str,
    ) -> Result<TransactionView, WorkflowError> {
        // 1. Absent or not ACTIVE is NotSubscribed. Unlike the subscribe
        //    pre-check, a failed lookup here surfaces as a store fault.
        if !self
            .ledger
            .find(client_id, fund_id)
            .await?
            .is_some_and(|s| s.is_active())
        {
            return Err(WorkflowError::NotSubscribed);
        }

        // 2. Resolve collaborators
        let fund = self
            .funds
            .get(fund_id)
            .await?
            .ok_or(WorkflowError::NotFound)?;
        let client = self
            .clients
            .get(client_id)
            .await?
            .ok_or(WorkflowError::NotFound)?;

        // 3. Conditional status flip; a concurrent cancel loses here. If a
        //    later step fails the subscription stays CANCELLED with no
        //    compensating refund, and a second attempt reports
        //    NotSubscribed.
        let cancelled = self.ledger.mark_cancelled(client_id, fund_id).await?;

        // 4. The refund is the frozen amount
        let transaction =
            Transaction::cancellation(client_id, fund_id, cancelled.amount_subscribed);

        // 5/6. Credit, then record
        self.clients
            .apply_balance_delta(client_id, cancelled.amount_subscribed)
            .await?;
        self.log.append(transaction.clone()).await?;

        // 7.
        self.notify(
            &client,
            &format!(
                "You have successfully cancelled your subscription to fund {}",
                fund.name
            ),
        )
        .await;

        Ok(TransactionView {
            transaction,
            fund_name: Some(fund.name),
        })
    }

    /// The `limit` most recent transactions for a client, newest first,
    /// each annotated with the fund's display name when the fund still
    /// exists.
    pub async fn history(
        &self,
        client_id: &str,
        limit: usize,
    ) -> Result<Vec<TransactionView>, WorkflowError> {
        let transactions = self.log.recent(client_id, limit).await?;
        let mut views = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            let fund_name = self.fund_name(&transaction.fund_id).await;
            views.push(TransactionView {
                transaction,
                fund_name,
            });
        }
        Ok(views)
    }

    /// All ACTIVE subscriptions for a client, enriched the same way as the
    /// history.
    pub async fn active_subscriptions(
        &self,
        client_id: &str,
    ) -> Result<Vec<SubscriptionView>, WorkflowError> {
        let subscriptions = self.ledger.active_for_client(client_id).await?;
        let mut views = Vec::with_capacity(subscriptions.len());
        for subscription in subscriptions {
            let fund_name = self.fund_name(&subscription.fund_id).await;
            views.push(SubscriptionView {
                subscription,
                fund_name,
            });
        }
        Ok(views)
    }

    pub async fn client(&self, client_id: &str) -> Result<Option<Client>, WorkflowError> {
        self.clients.get(client_id).await
    }

    /// Partial update of a client's contact details and preferred channel.
    pub async fn update_client(
        &self,
        client_id: &str,
        update: ClientUpdate,
    ) -> Result<Client, WorkflowError> {
        self.clients
            .update_contact(client_id, update)
            .await?
            .ok_or(WorkflowError::NotFound)
    }

    pub async fn funds(&self) -> Result<Vec<Fund>, WorkflowError> {
        self.funds.list_all().await
    }

    pub async fn fund(&self, fund_id: &str) -> Result<Option<Fund>, WorkflowError> {
        self.funds.get(fund_id).await
    }

    /// Best-effort name lookup for read-path enrichment. A missing fund or
    /// a catalog fault leaves the record unnamed rather than failing the
    /// whole call.
    async fn fund_name(&self, fund_id: &str) -> Option<String> {
        match self.funds.get(fund_id).await {
            Ok(fund) => fund.map(|f| f.name),
            Err(err) => {
                tracing::warn!(fund_id, error = %err, "fund lookup failed during enrichment");
                None
            }
        }
    }

    async fn notify(&self, client: &Client, message: &str) {
        if !self.notifier.send(client, message).await {
            tracing::warn!(
                client_id = %client.client_id,
                "notification could not be delivered"
            );
        }
    }
}
