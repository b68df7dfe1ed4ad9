//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .login_id("buyer01")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    login_id: String,
    login_pw: String,
    user_nm: String,
    status: String,
    admin: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - login_id: `"user{id}"` where id is auto-incremented
    /// - login_pw: a placeholder that no password verifies against
    /// - user_nm: `"User {id}"`
    /// - status: `"DEFAULT"`
    /// - admin: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            login_id: format!("user{}", id),
            login_pw: "unset".to_string(),
            user_nm: format!("User {}", id),
            status: "DEFAULT".to_string(),
            admin: false,
        }
    }

    /// Sets the login id for the user.
    pub fn login_id(mut self, login_id: impl Into<String>) -> Self {
        self.login_id = login_id.into();
        self
    }

    /// Sets the stored password hash. Pass an already hashed value.
    pub fn login_pw(mut self, login_pw: impl Into<String>) -> Self {
        self.login_pw = login_pw.into();
        self
    }

    /// Sets the display name for the user.
    pub fn user_nm(mut self, user_nm: impl Into<String>) -> Self {
        self.user_nm = user_nm.into();
        self
    }

    /// Sets the account status (`DEFAULT` or `DELETED`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the admin role flag.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            login_id: ActiveValue::Set(self.login_id),
            login_pw: ActiveValue::Set(self.login_pw),
            user_nm: ActiveValue::Set(self.user_nm),
            hp_num: ActiveValue::Set("010-0000-0000".to_string()),
            email: ActiveValue::Set("user@example.com".to_string()),
            zip_no: ActiveValue::Set("04524".to_string()),
            road_full_addr: ActiveValue::Set("1 Market Road".to_string()),
            jibun_addr: ActiveValue::Set("1-1 Market-dong".to_string()),
            addr_detail: ActiveValue::Set("Unit 101".to_string()),
            status: ActiveValue::Set(self.status),
            admin: ActiveValue::Set(self.admin),
            reg_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
