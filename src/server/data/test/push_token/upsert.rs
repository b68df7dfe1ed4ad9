use super::*;

#[tokio::test]
async fn stores_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PushToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PushTokenRepository::new(db);
    repo.upsert("buyer01", "device-a".to_string()).await?;

    assert_eq!(repo.find("buyer01").await?.as_deref(), Some("device-a"));
    assert_eq!(repo.find("buyer02").await?, None);

    Ok(())
}

/// Expected: the latest token replaces the previous one
#[tokio::test]
async fn replaces_existing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PushToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PushTokenRepository::new(db);
    repo.upsert("buyer01", "device-a".to_string()).await?;
    repo.upsert("buyer01", "device-b".to_string()).await?;

    assert_eq!(repo.find("buyer01").await?.as_deref(), Some("device-b"));

    Ok(())
}
