use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub item_cd: String,
    pub login_no: i32,
    pub item_nm: String,
    pub item_price: i64,
    pub delivery_price: i64,
    pub category_cd: String,
    pub division_cd: String,
    pub status: String,
    pub disp_yn: String,
    pub del_yn: String,
    pub sale_start_date: Option<DateTime<Utc>>,
    pub sale_end_date: Option<DateTime<Utc>>,
    pub reg_date: DateTime<Utc>,
}

/// Single product with its fulfilled order quantity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub order_cnt: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    pub item_nm: String,
    pub item_price: i64,
    #[serde(default)]
    pub delivery_price: i64,
    pub category_cd: String,
    pub division_cd: String,
    pub sale_start_date: Option<DateTime<Utc>>,
    pub sale_end_date: Option<DateTime<Utc>>,
}

/// Query string accepted by `GET /product/myProducts`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ProductSearchDto {
    /// Delete flag filter (`Y`/`N`)
    pub del_yn: Option<String>,
    /// Display flag filter (`Y`/`N`)
    pub disp_yn: Option<String>,
    pub status: Option<String>,
    pub category_cd: Option<String>,
    pub division_cd: Option<String>,
    /// Inclusive lower bound on the registration date
    pub from_reg_date: Option<NaiveDate>,
    /// Inclusive upper bound on the registration date
    pub to_reg_date: Option<NaiveDate>,
    /// `NEWEST` (default), `OLDEST`, `PRICE_ASC` or `PRICE_DESC`
    pub sort_status: Option<String>,
    /// 1-based page number (default 1)
    pub pg: Option<u64>,
    /// Rows per page (default 10, max 100)
    pub pg_sz: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductsDto {
    pub products: Vec<ProductDto>,
    pub total: u64,
    pub pg: u64,
    pub pg_sz: u64,
}
