use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{
        CreateUserParam, DeleteOutcome, LoginOutcome, PasswordChangeOutcome, SignUpOutcome,
        SignUpParam, UpdateUserParam, User, UserStatus,
    },
    util::password::{hash_password, verify_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    admin_login_ids: &'a [String],
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            admin_login_ids: &[],
        }
    }

    /// Login ids that are promoted to admin when they log in successfully.
    pub fn with_admin_login_ids(mut self, admin_login_ids: &'a [String]) -> Self {
        self.admin_login_ids = admin_login_ids;
        self
    }

    /// Gets the profile of a user by login number
    pub async fn get_user_info(&self, login_no: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).find_by_login_no(login_no).await
    }

    /// Whether a login id is taken. Deleted accounts keep their id reserved.
    pub async fn is_duplicated_id(&self, login_id: &str) -> Result<bool, AppError> {
        UserRepository::new(self.db).exists_by_login_id(login_id).await
    }

    /// Registers a new account with an argon2-hashed password.
    ///
    /// The id is re-checked here, and a unique violation from a concurrent sign-up with
    /// the same id is reported as a duplicate rather than an error.
    ///
    /// # Returns
    /// - `Ok(SignUpOutcome::Created(user))` - Account created
    /// - `Ok(SignUpOutcome::DuplicatedId)` - Login id already taken
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn sign_up(&self, param: SignUpParam) -> Result<SignUpOutcome, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.exists_by_login_id(&param.login_id).await? {
            return Ok(SignUpOutcome::DuplicatedId);
        }

        let password_hash = hash_password(param.login_pw).await?;

        let result = repo
            .create(CreateUserParam {
                login_id: param.login_id,
                password_hash,
                user_nm: param.user_nm,
                hp_num: param.hp_num,
                email: param.email,
                zip_no: param.zip_no,
                road_full_addr: param.road_full_addr,
                jibun_addr: param.jibun_addr,
                addr_detail: param.addr_detail,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!("Created user {} ({})", user.login_no, user.login_id);
                Ok(SignUpOutcome::Created(user))
            }
            Err(AppError::DbErr(err))
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                Ok(SignUpOutcome::DuplicatedId)
            }
            Err(err) => Err(err),
        }
    }

    /// Checks login credentials.
    ///
    /// The deleted status is only reported once the password has matched, so a wrong
    /// password never reveals whether an account was deleted.
    pub async fn login(&self, login_id: &str, login_pw: String) -> Result<LoginOutcome, AppError> {
        let Some(mut user) = UserRepository::new(self.db).find_by_login_id(login_id).await? else {
            return Ok(LoginOutcome::Fail);
        };

        if !verify_password(login_pw, user.password_hash.clone()).await? {
            return Ok(LoginOutcome::Fail);
        }

        if user.status == UserStatus::Deleted {
            return Ok(LoginOutcome::Deleted);
        }

        if !user.admin && self.admin_login_ids.contains(&user.login_id) {
            UserRepository::new(self.db)
                .set_admin(user.login_no, true)
                .await?;
            user.admin = true;

            tracing::info!("Granted admin role to {}", user.login_id);
        }

        Ok(LoginOutcome::Success(user))
    }

    /// Replaces the password after verifying the current one.
    pub async fn update_password(
        &self,
        login_no: i32,
        password_before: String,
        password_after: String,
    ) -> Result<PasswordChangeOutcome, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_login_no(login_no).await? else {
            return Ok(PasswordChangeOutcome::NotFound);
        };

        if !verify_password(password_before, user.password_hash).await? {
            return Ok(PasswordChangeOutcome::PasswordMismatch);
        }

        let password_hash = hash_password(password_after).await?;

        if repo.update_password(login_no, password_hash).await? {
            Ok(PasswordChangeOutcome::Changed)
        } else {
            Ok(PasswordChangeOutcome::NotFound)
        }
    }

    /// Updates the profile fields of a user
    /// Returns None if the user doesn't exist
    pub async fn update_profile(&self, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).update_profile(param).await
    }

    /// Soft-deletes an account after verifying its password.
    pub async fn delete(&self, login_no: i32, login_pw: String) -> Result<DeleteOutcome, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_login_no(login_no).await? else {
            return Ok(DeleteOutcome::NotFound);
        };

        if !verify_password(login_pw, user.password_hash).await? {
            return Ok(DeleteOutcome::PasswordMismatch);
        }

        if !repo.mark_deleted(login_no).await? {
            return Ok(DeleteOutcome::NotFound);
        }

        tracing::info!("Deleted user {} ({})", user.login_no, user.login_id);

        Ok(DeleteOutcome::Deleted)
    }
}
