use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub login_no: i32,
    pub login_id: String,
    pub user_nm: String,
    pub hp_num: String,
    pub email: String,
    pub zip_no: String,
    pub road_full_addr: String,
    pub jibun_addr: String,
    pub addr_detail: String,
    pub status: String,
    pub admin: bool,
    pub reg_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoDto {
    pub user: UserDto,
}

/// Sign-up request. Every field is required; absent fields are rejected with 400.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpDto {
    pub login_id: Option<String>,
    pub login_pw: Option<String>,
    pub user_nm: Option<String>,
    pub hp_num: Option<String>,
    pub email: Option<String>,
    pub zip_no: Option<String>,
    pub road_full_addr: Option<String>,
    pub jibun_addr: Option<String>,
    pub addr_detail: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub login_id: String,
    pub login_pw: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginStatus {
    Success,
    Fail,
    Deleted,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub result: LoginStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserResultStatus {
    Success,
    Fail,
    DuplicatedId,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserResultDto {
    pub message: UserResultStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordDto {
    pub password_before_change: Option<String>,
    pub password_after_change: Option<String>,
}

/// Profile update request. Missing fields are reported one at a time via `UpdateStatus`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub user_nm: Option<String>,
    pub hp_num: Option<String>,
    pub email: Option<String>,
    pub zip_no: Option<String>,
    pub road_full_addr: Option<String>,
    pub jibun_addr: Option<String>,
    pub addr_detail: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateStatus {
    Success,
    EmptyAddress,
    EmptyAddressDetail,
    EmptyHpnumber,
    EmptyEmail,
    EmptyUsernm,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateUserResultDto {
    pub message: UpdateStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserDto {
    pub login_pw: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PushTokenDto {
    pub token: String,
}
