//! User domain models and parameters.
//!
//! Provides the marketplace account model with profile, address and role data, plus
//! parameter types for sign-up, profile updates and the outcomes of credential checks.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{SignUpDto, UpdateStatus, UpdateUserDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Account status. Deleted accounts keep their row so the login id stays reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Default,
    Deleted,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Deleted => "DELETED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DEFAULT" => Some(Self::Default),
            "DELETED" => Some(Self::Deleted),
            _ => None,
        }
    }
}

/// Marketplace user with credentials, profile and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Surrogate key, also stored in the session after login.
    pub login_no: i32,
    /// Unique login id chosen at sign-up.
    pub login_id: String,
    /// Argon2 PHC hash. Never leaves the server.
    pub password_hash: String,
    pub user_nm: String,
    pub hp_num: String,
    pub email: String,
    pub zip_no: String,
    pub road_full_addr: String,
    pub jibun_addr: String,
    pub addr_detail: String,
    pub status: UserStatus,
    /// Whether the user holds the admin role.
    pub admin: bool,
    pub reg_date: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            login_no: self.login_no,
            login_id: self.login_id,
            user_nm: self.user_nm,
            hp_num: self.hp_num,
            email: self.email,
            zip_no: self.zip_no,
            road_full_addr: self.road_full_addr,
            jibun_addr: self.jibun_addr,
            addr_detail: self.addr_detail,
            status: self.status.as_str().to_string(),
            admin: self.admin,
            reg_date: self.reg_date,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownUserStatus))` - Stored status is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let status = UserStatus::parse(&entity.status)
            .ok_or_else(|| InternalError::UnknownUserStatus(entity.status.clone(), entity.login_no))?;

        Ok(Self {
            login_no: entity.login_no,
            login_id: entity.login_id,
            password_hash: entity.login_pw,
            user_nm: entity.user_nm,
            hp_num: entity.hp_num,
            email: entity.email,
            zip_no: entity.zip_no,
            road_full_addr: entity.road_full_addr,
            jibun_addr: entity.jibun_addr,
            addr_detail: entity.addr_detail,
            status,
            admin: entity.admin,
            reg_date: entity.reg_date,
        })
    }
}

/// Validated sign-up request with a plaintext password, hashed by the service.
#[derive(Debug, Clone)]
pub struct SignUpParam {
    pub login_id: String,
    pub login_pw: String,
    pub user_nm: String,
    pub hp_num: String,
    pub email: String,
    pub zip_no: String,
    pub road_full_addr: String,
    pub jibun_addr: String,
    pub addr_detail: String,
}

impl SignUpParam {
    /// Builds sign-up parameters from the request DTO.
    ///
    /// # Returns
    /// - `Some(SignUpParam)` - Every field was present and non-blank
    /// - `None` - At least one required field is missing
    pub fn from_dto(dto: SignUpDto) -> Option<Self> {
        Some(Self {
            login_id: required(dto.login_id)?,
            login_pw: required(dto.login_pw)?,
            user_nm: required(dto.user_nm)?,
            hp_num: required(dto.hp_num)?,
            email: required(dto.email)?,
            zip_no: required(dto.zip_no)?,
            road_full_addr: required(dto.road_full_addr)?,
            jibun_addr: required(dto.jibun_addr)?,
            addr_detail: required(dto.addr_detail)?,
        })
    }
}

/// Row values for inserting a user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub login_id: String,
    pub password_hash: String,
    pub user_nm: String,
    pub hp_num: String,
    pub email: String,
    pub zip_no: String,
    pub road_full_addr: String,
    pub jibun_addr: String,
    pub addr_detail: String,
}

/// Profile fields that a logged-in user may change.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub login_no: i32,
    pub user_nm: String,
    pub hp_num: String,
    pub email: String,
    pub zip_no: String,
    pub road_full_addr: String,
    pub jibun_addr: String,
    pub addr_detail: String,
}

impl UpdateUserParam {
    /// Validates a profile update, reporting the first missing field group.
    ///
    /// Fields are checked in a fixed order: address (road, jibun, zip), address detail,
    /// phone number, email, then name.
    pub fn from_dto(login_no: i32, dto: UpdateUserDto) -> Result<Self, UpdateStatus> {
        let (Some(road_full_addr), Some(jibun_addr), Some(zip_no)) = (
            required(dto.road_full_addr),
            required(dto.jibun_addr),
            required(dto.zip_no),
        ) else {
            return Err(UpdateStatus::EmptyAddress);
        };
        let addr_detail = required(dto.addr_detail).ok_or(UpdateStatus::EmptyAddressDetail)?;
        let hp_num = required(dto.hp_num).ok_or(UpdateStatus::EmptyHpnumber)?;
        let email = required(dto.email).ok_or(UpdateStatus::EmptyEmail)?;
        let user_nm = required(dto.user_nm).ok_or(UpdateStatus::EmptyUsernm)?;

        Ok(Self {
            login_no,
            user_nm,
            hp_num,
            email,
            zip_no,
            road_full_addr,
            jibun_addr,
            addr_detail,
        })
    }
}

/// Result of a sign-up attempt that did not fail with an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    Created(User),
    DuplicatedId,
}

/// Result of checking login credentials.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success(User),
    /// Unknown id or wrong password.
    Fail,
    /// Credentials matched a deleted account.
    Deleted,
}

/// Result of a password change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChangeOutcome {
    Changed,
    PasswordMismatch,
    NotFound,
}

/// Result of an account deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    PasswordMismatch,
    NotFound,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
