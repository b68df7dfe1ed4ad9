use super::*;

/// Tests listing a buyer's orders with product names.
///
/// Expected: Ok with only the buyer's orders, newest first, each with its item name
#[tokio::test]
async fn lists_buyer_orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let buyer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db, seller.login_no)
        .item_nm("Lamp")
        .build()
        .await?;

    let first = factory::create_order(db, buyer.login_no, &product.item_cd).await?;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = factory::create_order(db, buyer.login_no, &product.item_cd).await?;
    factory::create_order(db, other.login_no, &product.item_cd).await?;

    let orders = OrderRepository::new(db).list_by_user(buyer.login_no).await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].order.order_cd, second.order_cd);
    assert_eq!(orders[1].order.order_cd, first.order_cd);
    assert!(orders
        .iter()
        .all(|detail| detail.item_nm.as_deref() == Some("Lamp")));

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_user_without_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let buyer = factory::create_user(db).await?;

    assert!(OrderRepository::new(db)
        .list_by_user(buyer.login_no)
        .await?
        .is_empty());

    Ok(())
}
