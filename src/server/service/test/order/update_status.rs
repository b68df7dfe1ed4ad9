use super::*;

/// Tests a legal transition.
///
/// Expected: Ok with the new status stored and one log row written
#[tokio::test]
async fn moves_order_and_logs_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let updated = OrderService::new(db, None)
        .update_status(status_param(&order.order_cd, OrderStatus::Preparing))
        .await?;

    assert_eq!(updated.status, OrderStatus::Preparing);
    let stored = OrderRepository::new(db)
        .find_by_order_cd(&order.order_cd)
        .await?
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Preparing);
    let logs = OrderLogRepository::new(db)
        .list_by_order(&order.order_cd)
        .await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, OrderStatus::Preparing);

    Ok(())
}

/// Tests that delivery adds the stored order quantity to the item counter.
///
/// Expected: ORDER_CNT for the item equals the order quantity
#[tokio::test]
async fn delivery_increments_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let buyer = factory::create_user(db).await?;
    let product = factory::create_product(db, seller.login_no).await?;
    let order = factory::order::OrderFactory::new(db, buyer.login_no, &product.item_cd)
        .order_cnt(3)
        .order_status_cd("OSC005")
        .build()
        .await?;

    OrderService::new(db, None)
        .update_status(status_param(&order.order_cd, OrderStatus::DeliveryComplete))
        .await?;

    let count = CounterRepository::new(db)
        .get(ORDER_COUNT_KEY, &product.item_cd)
        .await?;
    assert_eq!(count, 3);

    Ok(())
}

/// Tests the full delivery and refund path for one order.
///
/// Expected: counter goes up by the quantity on delivery and back down on refund
#[tokio::test]
async fn refund_complete_decrements_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let buyer = factory::create_user(db).await?;
    let product = factory::create_product(db, seller.login_no).await?;
    let order = factory::order::OrderFactory::new(db, buyer.login_no, &product.item_cd)
        .order_cnt(4)
        .order_status_cd("OSC006")
        .build()
        .await?;
    let service = OrderService::new(db, None);
    let counter = CounterRepository::new(db);

    service
        .update_status(status_param(&order.order_cd, OrderStatus::DeliveryComplete))
        .await?;
    assert_eq!(counter.get(ORDER_COUNT_KEY, &product.item_cd).await?, 4);

    service
        .update_status(status_param(&order.order_cd, OrderStatus::RefundRequested))
        .await?;
    assert_eq!(counter.get(ORDER_COUNT_KEY, &product.item_cd).await?, 4);

    service
        .update_status(status_param(&order.order_cd, OrderStatus::RefundComplete))
        .await?;
    assert_eq!(counter.get(ORDER_COUNT_KEY, &product.item_cd).await?, 0);

    Ok(())
}

/// Expected: statuses other than delivery and refund leave the counter untouched
#[tokio::test]
async fn other_statuses_leave_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let service = OrderService::new(db, None);

    for status in [
        OrderStatus::PaymentConfirmed,
        OrderStatus::Preparing,
        OrderStatus::Packed,
        OrderStatus::ShippingStarted,
        OrderStatus::InTransit,
    ] {
        service
            .update_status(status_param(&order.order_cd, status))
            .await?;
    }

    let count = CounterRepository::new(db)
        .get(ORDER_COUNT_KEY, &product.item_cd)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that the lifecycle rejects skipping straight to a refund.
///
/// Expected: Err(IllegalTransition) with status, logs and counter unchanged
#[tokio::test]
async fn rejects_illegal_transition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let result = OrderService::new(db, None)
        .update_status(status_param(&order.order_cd, OrderStatus::RefundComplete))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::IllegalTransition {
            from: "OSC001",
            to: "OSC009"
        }))
    ));
    let stored = OrderRepository::new(db)
        .find_by_order_cd(&order.order_cd)
        .await?
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Accepted);
    assert!(OrderLogRepository::new(db)
        .list_by_order(&order.order_cd)
        .await?
        .is_empty());
    assert_eq!(
        CounterRepository::new(db)
            .get(ORDER_COUNT_KEY, &product.item_cd)
            .await?,
        0
    );

    Ok(())
}

/// Expected: a terminal order accepts no further status
#[tokio::test]
async fn rejects_changes_after_refund_complete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let product = factory::create_product(db, seller.login_no).await?;
    let order = factory::order::OrderFactory::new(db, seller.login_no, &product.item_cd)
        .order_status_cd("OSC009")
        .build()
        .await?;

    let result = OrderService::new(db, None)
        .update_status(status_param(&order.order_cd, OrderStatus::DeliveryComplete))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::IllegalTransition { .. }))
    ));

    Ok(())
}

#[tokio::test]
async fn returns_not_found_for_unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderService::new(db, None)
        .update_status(status_param("OD-MISSING", OrderStatus::Preparing))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that the buyer is notified after a notifiable status change.
///
/// Expected: one push with the preparing message sent to the buyer's device
#[tokio::test]
async fn notifies_buyer_after_commit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (url, captured) = start_push_gateway().await;
    let client = PushClient::new(reqwest::Client::new(), url, "key".to_string());

    let (buyer, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    PushService::new(db, None)
        .register_token(&buyer.login_id, "buyer-device".to_string())
        .await?;

    OrderService::new(db, Some(&client))
        .update_status(status_param(&order.order_cd, OrderStatus::Preparing))
        .await?;

    assert_eq!(wait_for_pushes(&captured, 1).await, 1);
    let captured = captured.lock().await;
    assert_eq!(captured[0].1["to"], "buyer-device");
    assert_eq!(
        captured[0].1["notification"]["title"],
        PushMessage::ORDER_PREPARING.title
    );

    Ok(())
}

/// Expected: no push for a status without a message
#[tokio::test]
async fn silent_status_sends_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (url, captured) = start_push_gateway().await;
    let client = PushClient::new(reqwest::Client::new(), url, "key".to_string());

    let (buyer, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    PushService::new(db, None)
        .register_token(&buyer.login_id, "buyer-device".to_string())
        .await?;

    OrderService::new(db, Some(&client))
        .update_status(status_param(&order.order_cd, OrderStatus::PaymentConfirmed))
        .await?;

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(captured.lock().await.is_empty());

    Ok(())
}
