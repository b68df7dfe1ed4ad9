use super::*;

/// Expected: the order with every status it entered through the service
#[tokio::test]
async fn returns_order_with_logs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let service = OrderService::new(db, None);

    service
        .update_status(status_param(&order.order_cd, OrderStatus::PaymentConfirmed))
        .await?;
    service
        .update_status(status_param(&order.order_cd, OrderStatus::Preparing))
        .await?;

    let (found, logs) = service.history(&order.order_cd).await?.unwrap();

    assert_eq!(found.status, OrderStatus::Preparing);
    let statuses: Vec<OrderStatus> = logs.into_iter().map(|log| log.status).collect();
    assert_eq!(
        statuses,
        vec![OrderStatus::PaymentConfirmed, OrderStatus::Preparing]
    );

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(OrderService::new(db, None)
        .history("OD-MISSING")
        .await?
        .is_none());

    Ok(())
}
