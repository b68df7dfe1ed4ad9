use super::*;

/// Logs the given user entity into the test session.
async fn log_in(session: &tower_sessions::Session, entity: entity::user::Model) -> Result<User, AppError> {
    let user = User::from_entity(entity)?;
    AuthSession::new(session).start(&user).await?;
    Ok(user)
}

/// Expected: Err(UserNotInSession) when nobody is logged in
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Expected: Ok(User) for an active user with no permissions required
#[tokio::test]
async fn grants_access_to_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let entity = factory::create_user(db).await?;
    let user = log_in(session, entity).await?;

    let resolved = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(resolved.login_no, user.login_no);

    Ok(())
}

/// Tests that a deleted account loses access even with a live session.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let entity = factory::user::UserFactory::new(db)
        .status("DELETED")
        .build()
        .await?;
    let user = log_in(session, entity).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(login_no))) => {
            assert_eq!(login_no, user.login_no)
        }
        other => panic!("Expected UserNotInDatabase, got {:?}", other),
    }

    Ok(())
}

/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let entity = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await?;
    log_in(session, entity).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert!(user.admin);

    Ok(())
}

/// Expected: Err(AccessDenied) for a regular user
#[tokio::test]
async fn denies_admin_permission_to_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let entity = factory::create_user(db).await?;
    let user = log_in(session, entity).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(login_no, message))) => {
            assert_eq!(login_no, user.login_no);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}
