use super::*;

#[tokio::test]
async fn finds_user_by_login_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .login_id("seller01")
        .admin(true)
        .build()
        .await?;

    let found = UserRepository::new(db).find_by_login_id("seller01").await?;

    let found = found.unwrap();
    assert_eq!(found.login_no, created.login_no);
    assert!(found.admin);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_login_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    assert!(UserRepository::new(db)
        .find_by_login_id("missing")
        .await?
        .is_none());

    Ok(())
}

/// Tests that a stored status outside DEFAULT/DELETED surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .login_id("odd")
        .status("LOCKED")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_login_id("odd").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
