use super::*;

/// Expected: true and the new status stored when the order is in the expected status
#[tokio::test]
async fn updates_when_status_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let repo = OrderRepository::new(db);

    let updated = repo
        .update_status_if(&order.order_cd, OrderStatus::Accepted, OrderStatus::Preparing)
        .await?;

    assert!(updated);
    let stored = repo.find_by_order_cd(&order.order_cd).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Preparing);

    Ok(())
}

/// Tests the compare-and-set guard.
///
/// Expected: false and the status unchanged when the order already moved on
#[tokio::test]
async fn skips_when_status_changed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let repo = OrderRepository::new(db);

    repo.update_status_if(&order.order_cd, OrderStatus::Accepted, OrderStatus::Preparing)
        .await?;
    let second = repo
        .update_status_if(
            &order.order_cd,
            OrderStatus::Accepted,
            OrderStatus::PaymentConfirmed,
        )
        .await?;

    assert!(!second);
    let stored = repo.find_by_order_cd(&order.order_cd).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Preparing);

    Ok(())
}
