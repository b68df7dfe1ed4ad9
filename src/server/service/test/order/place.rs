use super::*;
use chrono::{Duration, Utc};

/// Tests placing an order whose total matches the server computation.
///
/// Product defaults are 10,000 per item and 2,500 delivery, so two items with a
/// 1,000 discount total 21,500.
///
/// Expected: Ok with the Accepted status, the server total and an initial log row
#[tokio::test]
async fn accepts_matching_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let buyer = factory::create_user(db).await?;
    let product = factory::create_product(db, seller.login_no).await?;

    let order = OrderService::new(db, None)
        .place(PlaceOrderParam {
            discount_price: 1_000,
            ..place_param(buyer.login_no, &product.item_cd, 2, 21_500)
        })
        .await?;

    assert!(order.order_cd.starts_with(&format!("OD{}", buyer.login_no)));
    assert_eq!(order.order_cd.len(), format!("OD{}", buyer.login_no).len() + 14);
    assert_eq!(order.status, OrderStatus::Accepted);
    assert_eq!(order.total_price, 21_500);
    assert_eq!(order.discount_price, 1_000);

    let logs = OrderLogRepository::new(db)
        .list_by_order(&order.order_cd)
        .await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, OrderStatus::Accepted);

    Ok(())
}

/// Tests that a tampered total is rejected before anything is written.
///
/// Expected: Err(TotalPriceMismatch) and no order stored for the buyer
#[tokio::test]
async fn rejects_mismatched_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let buyer = factory::create_user(db).await?;
    let product = factory::create_product(db, seller.login_no).await?;

    let result = OrderService::new(db, None)
        .place(place_param(buyer.login_no, &product.item_cd, 1, 12_499))
        .await;

    match result {
        Err(AppError::OrderErr(OrderError::TotalPriceMismatch { client, server })) => {
            assert_eq!(client, 12_499);
            assert_eq!(server, 12_500);
        }
        other => panic!("Expected TotalPriceMismatch, got {:?}", other),
    }
    assert!(OrderRepository::new(db)
        .list_by_user(buyer.login_no)
        .await?
        .is_empty());

    Ok(())
}

/// Expected: NotFound for an unknown item and for a deleted product
#[tokio::test]
async fn rejects_missing_or_deleted_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let buyer = factory::create_user(db).await?;
    let deleted = factory::product::ProductFactory::new(db, seller.login_no)
        .del_yn("Y")
        .build()
        .await?;
    let service = OrderService::new(db, None);

    let missing = service
        .place(place_param(buyer.login_no, "IT-MISSING", 1, 12_500))
        .await;
    let gone = service
        .place(place_param(buyer.login_no, &deleted.item_cd, 1, 12_500))
        .await;

    assert!(matches!(missing, Err(AppError::NotFound(_))));
    assert!(matches!(gone, Err(AppError::NotFound(_))));

    Ok(())
}

/// Expected: InvalidQuantity for zero items and InvalidDiscount for a negative discount
#[tokio::test]
async fn rejects_invalid_quantity_and_discount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let buyer = factory::create_user(db).await?;
    let product = factory::create_product(db, seller.login_no).await?;
    let service = OrderService::new(db, None);

    let zero = service
        .place(place_param(buyer.login_no, &product.item_cd, 0, 2_500))
        .await;
    let negative_discount = service
        .place(PlaceOrderParam {
            discount_price: -100,
            ..place_param(buyer.login_no, &product.item_cd, 1, 12_600)
        })
        .await;

    assert!(matches!(
        zero,
        Err(AppError::OrderErr(OrderError::InvalidQuantity(0)))
    ));
    assert!(matches!(
        negative_discount,
        Err(AppError::OrderErr(OrderError::InvalidDiscount(-100)))
    ));

    Ok(())
}

/// Expected: NotOnSale once the sale window has ended
#[tokio::test]
async fn rejects_product_outside_sale_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let buyer = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db, seller.login_no)
        .sale_window(None, Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;

    let result = OrderService::new(db, None)
        .place(place_param(buyer.login_no, &product.item_cd, 1, 12_500))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::NotOnSale(_)))
    ));

    Ok(())
}

/// Tests that placement notifies the buyer with the accepted message.
#[tokio::test]
async fn notifies_buyer_on_placement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (url, captured) = start_push_gateway().await;
    let client = PushClient::new(reqwest::Client::new(), url, "key".to_string());

    let seller = factory::create_user(db).await?;
    let buyer = factory::create_user(db).await?;
    let product = factory::create_product(db, seller.login_no).await?;
    PushService::new(db, None)
        .register_token(&buyer.login_id, "buyer-device".to_string())
        .await?;

    OrderService::new(db, Some(&client))
        .place(place_param(buyer.login_no, &product.item_cd, 1, 12_500))
        .await?;

    assert_eq!(wait_for_pushes(&captured, 1).await, 1);
    assert_eq!(
        captured.lock().await[0].1["notification"]["title"],
        PushMessage::ORDER_ACCEPTED.title
    );

    Ok(())
}
