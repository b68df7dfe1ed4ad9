use super::*;

/// Tests that the first adjustment creates the counter.
///
/// Expected: counter equals the first delta
#[tokio::test]
async fn creates_missing_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ItemCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    repo.adjust("ORDER_CNT", "IT1", 3).await?;

    assert_eq!(repo.get("ORDER_CNT", "IT1").await?, 3);

    Ok(())
}

/// Tests accumulating positive and negative deltas.
///
/// Expected: counter equals the sum of all deltas
#[tokio::test]
async fn accumulates_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ItemCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    repo.adjust("ORDER_CNT", "IT1", 3).await?;
    repo.adjust("ORDER_CNT", "IT1", 5).await?;
    repo.adjust("ORDER_CNT", "IT1", -2).await?;

    assert_eq!(repo.get("ORDER_CNT", "IT1").await?, 6);

    Ok(())
}

/// Tests that counters are independent per item and per key.
#[tokio::test]
async fn keeps_counters_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ItemCounter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    repo.adjust("ORDER_CNT", "IT1", 4).await?;
    repo.adjust("ORDER_CNT", "IT2", 1).await?;
    repo.adjust("VIEW_CNT", "IT1", 9).await?;

    assert_eq!(repo.get("ORDER_CNT", "IT1").await?, 4);
    assert_eq!(repo.get("ORDER_CNT", "IT2").await?, 1);
    assert_eq!(repo.get("VIEW_CNT", "IT1").await?, 9);

    Ok(())
}
