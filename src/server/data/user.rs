//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing marketplace accounts. It handles
//! account creation, lookups by login number and login id, password and profile updates,
//! and soft deletion, converting entity models to domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User, UserStatus},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with `DEFAULT` status and no admin role.
    ///
    /// # Arguments
    /// - `param` - Profile fields and the already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Insert failed, including a unique violation on `login_id`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            login_id: ActiveValue::Set(param.login_id),
            login_pw: ActiveValue::Set(param.password_hash),
            user_nm: ActiveValue::Set(param.user_nm),
            hp_num: ActiveValue::Set(param.hp_num),
            email: ActiveValue::Set(param.email),
            zip_no: ActiveValue::Set(param.zip_no),
            road_full_addr: ActiveValue::Set(param.road_full_addr),
            jibun_addr: ActiveValue::Set(param.jibun_addr),
            addr_detail: ActiveValue::Set(param.addr_detail),
            status: ActiveValue::Set(UserStatus::Default.as_str().to_string()),
            admin: ActiveValue::Set(false),
            reg_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by login number, regardless of status.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that login number
    /// - `Err(AppError)` - Database error or unrecognized stored status
    pub async fn find_by_login_no(&self, login_no: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(login_no)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by login id, regardless of status.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that login id
    /// - `Err(AppError)` - Database error or unrecognized stored status
    pub async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::LoginId.eq(login_id))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks whether any user row, deleted or not, holds the login id.
    pub async fn exists_by_login_id(&self, login_id: &str) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::LoginId.eq(login_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the stored password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Password updated
    /// - `Ok(false)` - No user with that login number
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_password(
        &self,
        login_no: i32,
        password_hash: String,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::LoginNo.eq(login_no))
            .col_expr(
                entity::user::Column::LoginPw,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Overwrites the user's profile and address fields.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that login number
    /// - `Err(AppError)` - Database error during update
    pub async fn update_profile(&self, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        let Some(existing) = entity::prelude::User::find_by_id(param.login_no)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.user_nm = ActiveValue::Set(param.user_nm);
        active.hp_num = ActiveValue::Set(param.hp_num);
        active.email = ActiveValue::Set(param.email);
        active.zip_no = ActiveValue::Set(param.zip_no);
        active.road_full_addr = ActiveValue::Set(param.road_full_addr);
        active.jibun_addr = ActiveValue::Set(param.jibun_addr);
        active.addr_detail = ActiveValue::Set(param.addr_detail);

        let entity = active.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Grants or revokes the admin role.
    ///
    /// # Returns
    /// - `Ok(true)` - Admin flag updated
    /// - `Ok(false)` - No user with that login number
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_admin(&self, login_no: i32, is_admin: bool) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::LoginNo.eq(login_no))
            .col_expr(
                entity::user::Column::Admin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Soft-deletes a user by setting their status to `DELETED`.
    ///
    /// The row is kept so the login id stays reserved.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - No user with that login number
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_deleted(&self, login_no: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::LoginNo.eq(login_no))
            .col_expr(
                entity::user::Column::Status,
                sea_orm::sea_query::Expr::value(UserStatus::Deleted.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
