use super::*;

fn search(login_no: i32) -> ProductSearchParam {
    ProductSearchParam {
        login_no,
        per_page: 10,
        ..Default::default()
    }
}

/// Tests that only the seller's own products are listed.
///
/// Expected: Ok with the two products of the requesting seller
#[tokio::test]
async fn lists_only_own_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_product(db, seller.login_no).await?;
    factory::create_product(db, seller.login_no).await?;
    factory::create_product(db, other.login_no).await?;

    let page = ProductRepository::new(db).search(search(seller.login_no)).await?;

    assert_eq!(page.total, 2);
    assert!(page.products.iter().all(|p| p.login_no == seller.login_no));

    Ok(())
}

/// Tests that flag and code filters are combined.
///
/// Expected: Ok with only the displayed, non-deleted product in the category
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    let wanted = factory::product::ProductFactory::new(db, seller.login_no)
        .category_cd("BOOK")
        .build()
        .await?;
    factory::product::ProductFactory::new(db, seller.login_no)
        .category_cd("BOOK")
        .del_yn("Y")
        .build()
        .await?;
    factory::product::ProductFactory::new(db, seller.login_no)
        .category_cd("TOY")
        .build()
        .await?;

    let page = ProductRepository::new(db)
        .search(ProductSearchParam {
            del_yn: Some("N".to_string()),
            category_cd: Some("BOOK".to_string()),
            ..search(seller.login_no)
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.products[0].item_cd, wanted.item_cd);

    Ok(())
}

/// Tests price sorting and paging.
///
/// Expected: Ok with the second cheapest product alone on page two
#[tokio::test]
async fn sorts_by_price_and_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    for price in [3_000, 1_000, 2_000] {
        factory::product::ProductFactory::new(db, seller.login_no)
            .item_price(price)
            .build()
            .await?;
    }

    let page = ProductRepository::new(db)
        .search(ProductSearchParam {
            sort: ProductSort::PriceAsc,
            page: 1,
            per_page: 1,
            ..search(seller.login_no)
        })
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].item_price, 2_000);

    let page = ProductRepository::new(db)
        .search(ProductSearchParam {
            sort: ProductSort::PriceDesc,
            ..search(seller.login_no)
        })
        .await?;

    let prices: Vec<i64> = page.products.iter().map(|p| p.item_price).collect();
    assert_eq!(prices, vec![3_000, 2_000, 1_000]);

    Ok(())
}

/// Tests that an empty page past the end still reports the total.
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    factory::create_product(db, seller.login_no).await?;

    let page = ProductRepository::new(db)
        .search(ProductSearchParam {
            page: 5,
            ..search(seller.login_no)
        })
        .await?;

    assert_eq!(page.total, 1);
    assert!(page.products.is_empty());

    Ok(())
}
