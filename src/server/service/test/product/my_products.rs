use super::*;

#[tokio::test]
async fn lists_first_page_of_own_products() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_product(db, seller.login_no).await?;
    }

    let page = ProductService::new(db)
        .my_products(ProductSearchParam {
            login_no: seller.login_no,
            per_page: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.products.len(), 2);

    let dto = page.into_dto();
    assert_eq!(dto.pg, 1);
    assert_eq!(dto.pg_sz, 2);

    Ok(())
}
