use super::*;

/// Expected: Changed, after which only the new password logs in
#[tokio::test]
async fn changes_password_after_verification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user_with_password(db, "buyer01", "old-pw", UserStatus::Default).await?;
    let service = UserService::new(db);

    let outcome = service
        .update_password(user.login_no, "old-pw".to_string(), "new-pw".to_string())
        .await?;

    assert_eq!(outcome, PasswordChangeOutcome::Changed);
    assert_eq!(
        service.login("buyer01", "old-pw".to_string()).await?,
        LoginOutcome::Fail
    );
    assert!(matches!(
        service.login("buyer01", "new-pw".to_string()).await?,
        LoginOutcome::Success(_)
    ));

    Ok(())
}

/// Expected: PasswordMismatch and the old password still valid
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user_with_password(db, "buyer01", "old-pw", UserStatus::Default).await?;
    let service = UserService::new(db);

    let outcome = service
        .update_password(user.login_no, "guess".to_string(), "new-pw".to_string())
        .await?;

    assert_eq!(outcome, PasswordChangeOutcome::PasswordMismatch);
    assert!(matches!(
        service.login("buyer01", "old-pw".to_string()).await?,
        LoginOutcome::Success(_)
    ));

    Ok(())
}
