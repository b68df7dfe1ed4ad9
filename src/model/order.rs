use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order placement request. `total_price` is the client's computed total and must match
/// the server's computation exactly.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub item_cd: String,
    pub order_cnt: i32,
    #[serde(default)]
    pub discount_price: i64,
    pub total_price: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_cd: String,
    pub login_no: i32,
    pub item_cd: String,
    pub order_cnt: i32,
    pub discount_price: i64,
    pub total_price: i64,
    pub order_status_cd: String,
    pub order_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailDto {
    #[serde(flatten)]
    pub order: OrderDto,
    pub item_nm: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusDto {
    pub order_cd: String,
    pub order_status_cd: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLogDto {
    pub order_cd: String,
    pub order_status_cd: String,
    pub log_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResultDto {
    pub order: OrderDto,
}

/// An order with its status history, oldest entry first.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryDto {
    pub order: OrderDto,
    pub logs: Vec<OrderLogDto>,
}
