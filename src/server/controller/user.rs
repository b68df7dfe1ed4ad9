use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{
            DeleteUserDto, LoginDto, LoginResponseDto, LoginStatus, PushTokenDto, SignUpDto,
            UpdatePasswordDto, UpdateStatus, UpdateUserDto, UpdateUserResultDto, UserInfoDto,
            UserResultDto, UserResultStatus,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{
            DeleteOutcome, LoginOutcome, PasswordChangeOutcome, SignUpOutcome, SignUpParam,
            UpdateUserParam,
        },
        service::{push::PushService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

fn result(status: StatusCode, message: UserResultStatus) -> (StatusCode, Json<UserResultDto>) {
    (status, Json(UserResultDto { message }))
}

/// Get the logged-in user's profile.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `200 OK` - Profile without the password
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/user/myInfo",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged-in user's profile", body = UserInfoDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_info(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .get_user_info(user.login_no)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(UserInfoDto {
            user: user.into_dto(),
        }),
    ))
}

/// Check whether a login id is already taken.
///
/// Ids of deleted accounts stay taken.
#[utoipa::path(
    get,
    path = "/user/duplicated/{login_id}",
    tag = USER_TAG,
    params(
        ("login_id" = String, Path, description = "Login id to check")
    ),
    responses(
        (status = 200, description = "true if the id is taken", body = bool),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn duplicated(
    State(state): State<AppState>,
    Path(login_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let taken = UserService::new(&state.db)
        .is_duplicated_id(&login_id)
        .await?;

    Ok((StatusCode::OK, Json(taken)))
}

/// Register a new account.
///
/// # Returns
/// - `201 Created` - `SUCCESS`
/// - `400 Bad Request` - A field is missing, or `DUPLICATED_ID`
#[utoipa::path(
    post,
    path = "/user/signUp",
    tag = USER_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created", body = UserResultDto),
        (status = 400, description = "Missing field or duplicated id", body = UserResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SignUpParam::from_dto(payload)
        .ok_or_else(|| AppError::BadRequest("All sign-up fields are required".to_string()))?;

    let outcome = UserService::new(&state.db).sign_up(param).await?;

    Ok(match outcome {
        SignUpOutcome::Created(_) => result(StatusCode::CREATED, UserResultStatus::Success),
        SignUpOutcome::DuplicatedId => {
            result(StatusCode::BAD_REQUEST, UserResultStatus::DuplicatedId)
        }
    })
}

/// Log in with id and password.
///
/// On success the login identity is stored in the session. Ids listed in
/// `ADMIN_LOGIN_IDS` are granted the admin role.
///
/// # Returns
/// - `200 OK` - `SUCCESS` with the user's profile
/// - `401 Unauthorized` - `FAIL` for bad credentials, `DELETED` for a deleted account
#[utoipa::path(
    post,
    path = "/user/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 401, description = "Bad credentials or deleted account", body = LoginResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = UserService::new(&state.db)
        .with_admin_login_ids(&state.admin_login_ids)
        .login(&payload.login_id, payload.login_pw)
        .await?;

    let rejected = |result| {
        (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponseDto { result, user: None }),
        )
    };

    Ok(match outcome {
        LoginOutcome::Success(user) => {
            AuthSession::new(&session).start(&user).await?;

            (
                StatusCode::OK,
                Json(LoginResponseDto {
                    result: LoginStatus::Success,
                    user: Some(user.into_dto()),
                }),
            )
        }
        LoginOutcome::Fail => rejected(LoginStatus::Fail),
        LoginOutcome::Deleted => rejected(LoginStatus::Deleted),
    })
}

/// End the current session.
#[utoipa::path(
    get,
    path = "/user/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    StatusCode::OK
}

/// Change the logged-in user's password.
///
/// # Returns
/// - `200 OK` - `SUCCESS`
/// - `400 Bad Request` - Current or new password missing
/// - `401 Unauthorized` - `FAIL` when the current password does not match
#[utoipa::path(
    patch,
    path = "/user/password",
    tag = USER_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = UserResultDto),
        (status = 400, description = "Missing password", body = ErrorDto),
        (status = 401, description = "Current password mismatch or not logged in", body = UserResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (Some(before), Some(after)) = (
        payload.password_before_change.filter(|pw| !pw.is_empty()),
        payload.password_after_change.filter(|pw| !pw.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Current and new passwords are required".to_string(),
        ));
    };

    let outcome = UserService::new(&state.db)
        .update_password(user.login_no, before, after)
        .await?;

    Ok(match outcome {
        PasswordChangeOutcome::Changed => result(StatusCode::OK, UserResultStatus::Success),
        PasswordChangeOutcome::PasswordMismatch => {
            result(StatusCode::UNAUTHORIZED, UserResultStatus::Fail)
        }
        PasswordChangeOutcome::NotFound => result(StatusCode::NOT_FOUND, UserResultStatus::Fail),
    })
}

/// Update the logged-in user's profile.
///
/// Required fields are checked in order: address, address detail, phone, email, name.
/// The first missing one is reported.
#[utoipa::path(
    patch,
    path = "/user/update",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = UpdateUserResultDto),
        (status = 400, description = "First missing field", body = UpdateUserResultDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = match UpdateUserParam::from_dto(user.login_no, payload) {
        Ok(param) => param,
        Err(message) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(UpdateUserResultDto { message }),
            ))
        }
    };

    UserService::new(&state.db)
        .update_profile(param)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(UpdateUserResultDto {
            message: UpdateStatus::Success,
        }),
    ))
}

/// Delete the logged-in user's account.
///
/// The account is soft-deleted and the session is cleared.
///
/// # Returns
/// - `200 OK` - `SUCCESS`
/// - `401 Unauthorized` - `FAIL` when the password does not match
/// - `404 Not Found` - `FAIL` when the account no longer exists
#[utoipa::path(
    delete,
    path = "/user/delete",
    tag = USER_TAG,
    request_body = DeleteUserDto,
    responses(
        (status = 200, description = "Account deleted", body = UserResultDto),
        (status = 401, description = "Password mismatch or not logged in", body = UserResultDto),
        (status = 404, description = "Account not found", body = UserResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DeleteUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let outcome = UserService::new(&state.db)
        .delete(user.login_no, payload.login_pw)
        .await?;

    Ok(match outcome {
        DeleteOutcome::Deleted => {
            AuthSession::new(&session).clear().await;
            result(StatusCode::OK, UserResultStatus::Success)
        }
        DeleteOutcome::PasswordMismatch => result(StatusCode::UNAUTHORIZED, UserResultStatus::Fail),
        DeleteOutcome::NotFound => result(StatusCode::NOT_FOUND, UserResultStatus::Fail),
    })
}

/// Register or replace the logged-in user's push device token.
#[utoipa::path(
    post,
    path = "/user/token",
    tag = USER_TAG,
    request_body = PushTokenDto,
    responses(
        (status = 200, description = "Token stored"),
        (status = 400, description = "Empty token", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_token(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PushTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if payload.token.trim().is_empty() {
        return Err(AppError::BadRequest("Token is required".to_string()));
    }

    PushService::new(&state.db, state.push_client.as_ref())
        .register_token(&user.login_id, payload.token)
        .await?;

    Ok(StatusCode::OK)
}
