use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    /// Client-submitted total differs from the server-computed total.
    ///
    /// The computed value is kept for logging and is not echoed to the client.
    #[error("Total price mismatch")]
    TotalPriceMismatch { client: i64, server: i64 },

    /// Order quantity is zero or negative.
    #[error("Order quantity must be positive, got {0}")]
    InvalidQuantity(i32),

    /// Discount is negative.
    #[error("Discount price must not be negative, got {0}")]
    InvalidDiscount(i64),

    /// Price computation overflowed.
    #[error("Order total is out of range")]
    PriceOverflow,

    /// Product exists but is outside its sale window.
    #[error("Product {0} is not on sale")]
    NotOnSale(String),

    /// Status code is not one of `OSC001`..`OSC009`.
    #[error("Unknown order status code '{0}'")]
    UnknownStatus(String),

    /// Transition not allowed by the order status table.
    #[error("Order status cannot change from {from} to {to}")]
    IllegalTransition {
        from: &'static str,
        to: &'static str,
    },

    /// The order status changed between read and write.
    #[error("Order {0} was updated concurrently")]
    ConcurrentUpdate(String),
}

/// Converts order errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - For `ConcurrentUpdate`
/// - 400 Bad Request - For every other variant
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::ConcurrentUpdate(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
