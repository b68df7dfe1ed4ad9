use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No login identity stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// Session refers to a user that no longer exists or has been deleted.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session is missing or deleted")]
    UserNotInDatabase(i32),

    /// Logged-in user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - No session user, or the session user is gone
/// - 403 Forbidden - Missing permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Login required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Insufficient permissions".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
