use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{User, UserStatus},
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every requested permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Active user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session user is missing or deleted
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(login_no) = AuthSession::new(self.session).get_login_no().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let user = UserRepository::new(self.db)
            .find_by_login_no(login_no)
            .await?
            .filter(|user| user.status == UserStatus::Default)
            .ok_or(AuthError::UserNotInDatabase(login_no))?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            login_no,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
