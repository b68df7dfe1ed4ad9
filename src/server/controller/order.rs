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
        order::{
            CreateOrderDto, OrderDetailDto, OrderHistoryDto, OrderResultDto, UpdateOrderStatusDto,
        },
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::order::{PlaceOrderParam, UpdateOrderStatusParam},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order for the logged-in user.
///
/// The server recomputes `order_cnt * item_price + delivery_price - discount_price` and
/// rejects the order when the client's `total_price` differs.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `201 Created` - The accepted order in status `OSC001`
/// - `400 Bad Request` - Total mismatch, invalid quantity or discount, or item not on sale
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Item missing or deleted
#[utoipa::path(
    post,
    path = "/order",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order accepted", body = OrderResultDto),
        (status = 400, description = "Order rejected", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = PlaceOrderParam {
        login_no: user.login_no,
        item_cd: payload.item_cd,
        order_cnt: payload.order_cnt,
        discount_price: payload.discount_price,
        client_total: payload.total_price,
    };

    let order = OrderService::new(&state.db, state.push_client.as_ref())
        .place(param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderResultDto {
            order: order.into_dto(),
        }),
    ))
}

/// List the logged-in user's orders, newest first.
#[utoipa::path(
    get,
    path = "/order/myOrders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "The user's orders with item names", body = Vec<OrderDetailDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let orders = OrderService::new(&state.db, state.push_client.as_ref())
        .list_for_user(user.login_no)
        .await?;

    let dtos: Vec<OrderDetailDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Move an order to a new status.
///
/// Only transitions allowed by the order lifecycle are accepted. Delivery completion and
/// refund completion adjust the item's ordered count in the same transaction.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated order
/// - `400 Bad Request` - Unknown status code or illegal transition
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Order not found
/// - `409 Conflict` - The order changed status concurrently
#[utoipa::path(
    patch,
    path = "/order/status",
    tag = ORDER_TAG,
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Status updated", body = OrderResultDto),
        (status = 400, description = "Unknown status or illegal transition", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Concurrent status change", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateOrderStatusParam::new(payload.order_cd, &payload.order_status_cd)?;

    let order = OrderService::new(&state.db, state.push_client.as_ref())
        .update_status(param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OrderResultDto {
            order: order.into_dto(),
        }),
    ))
}

/// Get an order's status history.
///
/// # Access Control
/// - The order's owner, or `Admin`
#[utoipa::path(
    get,
    path = "/order/{order_cd}/logs",
    tag = ORDER_TAG,
    params(
        ("order_cd" = String, Path, description = "Order code")
    ),
    responses(
        (status = 200, description = "Order and its status history", body = OrderHistoryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn history(
    State(state): State<AppState>,
    session: Session,
    Path(order_cd): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (order, logs) = OrderService::new(&state.db, state.push_client.as_ref())
        .history(&order_cd)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_cd)))?;

    if order.login_no != user.login_no && !user.admin {
        return Err(AuthError::AccessDenied(
            user.login_no,
            format!("order {} belongs to another user", order_cd),
        )
        .into());
    }

    Ok((
        StatusCode::OK,
        Json(OrderHistoryDto {
            order: order.into_dto(),
            logs: logs.into_iter().map(|l| l.into_dto()).collect(),
        }),
    ))
}
