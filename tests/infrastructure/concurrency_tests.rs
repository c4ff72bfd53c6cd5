use crate::context::*;
use fundsub::domain::TransactionKind;

#[tokio::test]
async fn concurrent_cancels_refund_exactly_once() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;
    ctx.subscribe("C1", "F1").await.unwrap();

    let w1 = ctx.workflow.clone();
    let w2 = ctx.workflow.clone();
    let a = tokio::spawn(async move { w1.cancel("C1", "F1").await });
    let b = tokio::spawn(async move { w2.cancel("C1", "F1").await });
    let results = [a.await.unwrap(), b.await.unwrap()];

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert_eq!(ctx.balance("C1").await, 500_000.0);

    let cancellations = ctx
        .history("C1", 10)
        .await
        .iter()
        .filter(|v| v.transaction.kind == TransactionKind::Cancellation)
        .count();
    assert_eq!(cancellations, 1);
}

#[tokio::test]
async fn concurrent_double_subscribe_keeps_a_single_active_record() {
    let ctx = TestContext::new();
    ctx.client("C1", 500_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;

    let w1 = ctx.workflow.clone();
    let w2 = ctx.workflow.clone();
    let a = tokio::spawn(async move { w1.subscribe("C1", "F1", None).await });
    let b = tokio::spawn(async move { w2.subscribe("C1", "F1", None).await });
    let results = [a.await.unwrap(), b.await.unwrap()];

    // the conditional ledger write lets exactly one request through,
    // whether or not the pre-check saw the race, and the loser's debit
    // is credited back
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert_eq!(ctx.balance("C1").await, 425_000.0);

    let active = ctx.workflow.active_subscriptions("C1").await.unwrap();
    assert_eq!(active.len(), 1);
}

#[tokio::test]
async fn concurrent_subscribes_to_distinct_funds_lose_no_updates() {
    let ctx = TestContext::new();
    ctx.client("C1", 1_000_000.0).await;
    ctx.fund("F1", "FPV_TEST_RECAUDADORA", 75_000.0).await;
    ctx.fund("F2", "FPV_TEST_ECOPETROL", 125_000.0).await;
    ctx.fund("F3", "DEUDAPRIVADA", 50_000.0).await;
    ctx.fund("F4", "FDO-ACCIONES", 250_000.0).await;
    ctx.fund("F5", "FPV_TEST_DINAMICA", 100_000.0).await;

    let mut handles = Vec::new();
    for fund in ["F1", "F2", "F3", "F4", "F5"] {
        let workflow = ctx.workflow.clone();
        handles.push(tokio::spawn(
            async move { workflow.subscribe("C1", fund, None).await },
        ));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // 1_000_000 minus every minimum, no lost balance update
    assert_eq!(ctx.balance("C1").await, 400_000.0);
    assert_eq!(ctx.workflow.active_subscriptions("C1").await.unwrap().len(), 5);
}
