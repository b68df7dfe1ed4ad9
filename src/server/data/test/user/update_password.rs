use super::*;

#[tokio::test]
async fn replaces_password_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.update_password(user.login_no, "new-hash".to_string()).await?);

    let stored = repo.find_by_login_no(user.login_no).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}

#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db)
        .update_password(404, "hash".to_string())
        .await?);

    Ok(())
}
