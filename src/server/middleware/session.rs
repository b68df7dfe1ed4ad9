//! Type-safe session management wrappers.
//!
//! `AuthSession` wraps the tower-sessions `Session` with typed accessors for the login
//! identity, so handlers never touch raw session keys.

use tower_sessions::Session;

use crate::server::{error::AppError, model::user::User};

const SESSION_AUTH_LOGIN_NO: &str = "auth:login_no";
const SESSION_AUTH_LOGIN_ID: &str = "auth:login_id";

/// Authentication session management.
///
/// Stores the logged-in user's login number and login id and handles the session
/// lifecycle on login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session for `user`.
    ///
    /// The session id is cycled first so an id issued before login cannot be reused
    /// after it.
    ///
    /// # Returns
    /// - `Ok(())` - Identity stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session
    pub async fn start(&self, user: &User) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_LOGIN_NO, user.login_no)
            .await?;
        self.session
            .insert(SESSION_AUTH_LOGIN_ID, user.login_id.clone())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in user's login number.
    ///
    /// # Returns
    /// - `Ok(Some(login_no))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_login_no(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_LOGIN_NO).await?)
    }

    pub async fn get_login_id(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_LOGIN_ID).await?)
    }

    /// Clears all data from the session. Used on logout and account deletion.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
