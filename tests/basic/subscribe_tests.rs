use crate::context::*;
use fundsub::domain::{
    SubscriptionStatus, TransactionKind, TransactionStatus, WorkflowError,
};

#[tokio::test]
async fn subscribe_debits_the_fund_minimum() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;

    let view = ctx.subscribe("C1", "F1").await.unwrap();

    assert_eq!(view.transaction.kind, TransactionKind::Subscription);
    assert_eq!(view.transaction.status, TransactionStatus::Completed);
    assert_eq!(view.transaction.amount, 75_000.0);
    assert_eq!(view.fund_name.as_deref(), Some("FPV_TEST_RECAUDADORA"));
    assert_eq!(ctx.balance("C1").await, 425_000.0);

    let active = ctx.workflow.active_subscriptions("C1").await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].subscription.status, SubscriptionStatus::Active);
    assert_eq!(active[0].subscription.amount_subscribed, 75_000.0);
}

#[tokio::test]
async fn subscribe_with_insufficient_balance_fails_without_mutation() {
    let ctx = TestContext::new();
    ctx.client("C2", 50_000.0).await;
    ctx.fund("F2", "FPV_TEST_ECOPETROL", 125_000.0).await;

    let err = ctx.subscribe("C2", "F2").await.unwrap_err();

    assert_eq!(
        err,
        WorkflowError::InsufficientFunds {
            fund: "FPV_TEST_ECOPETROL".to_string()
        }
    );
    assert_eq!(err.status(), "FAILED");

    let report = err.report();
    assert_eq!(report.status, "FAILED");
    assert_eq!(
        report.error,
        "no available balance to subscribe to fund FPV_TEST_ECOPETROL"
    );

    assert_eq!(ctx.balance("C2").await, 50_000.0);
    assert!(ctx.history("C2", 10).await.is_empty());
    assert!(ctx.workflow.active_subscriptions("C2").await.unwrap().is_empty());
}

#[tokio::test]
async fn subscribe_with_exact_balance_succeeds() {
    let ctx = TestContext::new();
    ctx.client("C1", 75_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;

    ctx.subscribe("C1", "F1").await.unwrap();

    assert_eq!(ctx.balance("C1").await, 0.0);
}

#[tokio::test]
async fn subscribe_unknown_client_or_fund_is_not_found() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;

    assert_eq!(
        ctx.subscribe("GHOST", "F1").await.unwrap_err(),
        WorkflowError::NotFound
    );
    assert_eq!(
        ctx.subscribe("C1", "GHOST").await.unwrap_err(),
        WorkflowError::NotFound
    );
    assert_eq!(ctx.balance("C1").await, 500_000.0);
}

#[tokio::test]
async fn double_subscribe_debits_exactly_once() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;

    ctx.subscribe("C1", "F1").await.unwrap();
    let err = ctx.subscribe("C1", "F1").await.unwrap_err();

    assert_eq!(err, WorkflowError::AlreadySubscribed);
    assert_eq!(ctx.balance("C1").await, 425_000.0);
    assert_eq!(ctx.history("C1", 10).await.len(), 1);
}

#[tokio::test]
async fn requested_amount_never_overrides_the_minimum() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;

    let view = ctx
        .workflow
        .subscribe("C1", "F1", Some(200_000.0))
        .await
        .unwrap();

    assert_eq!(view.transaction.amount, 75_000.0);
    assert_eq!(ctx.balance("C1").await, 425_000.0);
}

#[tokio::test]
async fn resubscribe_after_cancel_creates_a_fresh_record() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;

    ctx.subscribe("C1", "F1").await.unwrap();
    let first = ctx.workflow.active_subscriptions("C1").await.unwrap()[0]
        .subscription
        .subscription_id
        .clone();

    ctx.cancel("C1", "F1").await.unwrap();
    ctx.subscribe("C1", "F1").await.unwrap();

    let active = ctx.workflow.active_subscriptions("C1").await.unwrap();
    assert_eq!(active.len(), 1);
    assert_ne!(active[0].subscription.subscription_id, first);
    assert_eq!(ctx.history("C1", 10).await.len(), 3);
    assert_eq!(ctx.balance("C1").await, 425_000.0);
}

#[tokio::test]
async fn subscribe_sends_a_notification_naming_the_fund() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;

    ctx.subscribe("C1", "F1").await.unwrap();

    let sent = ctx.notifier.sent().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.contains("FPV_TEST_RECAUDADORA"));
}

#[tokio::test]
async fn duplicate_rejected_at_the_ledger_write_credits_the_debit_back() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;

    ctx.subscribe("C1", "F1").await.unwrap();

    // the pre-check cannot see the existing record, so the duplicate is
    // only caught by the conditional write
    ctx.ledger.fail_lookups(true);
    let err = ctx.subscribe("C1", "F1").await.unwrap_err();
    ctx.ledger.fail_lookups(false);

    assert_eq!(err, WorkflowError::AlreadySubscribed);
    assert_eq!(ctx.balance("C1").await, 425_000.0);
    assert_eq!(ctx.history("C1", 10).await.len(), 1);
    assert_eq!(ctx.workflow.active_subscriptions("C1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn subscribe_proceeds_when_the_precheck_lookup_fails() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;
    ctx.ledger.fail_lookups(true);

    let view = ctx.subscribe("C1", "F1").await.unwrap();

    assert_eq!(view.transaction.amount, 75_000.0);
    assert_eq!(ctx.balance("C1").await, 425_000.0);
}
