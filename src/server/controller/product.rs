use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        product::{CreateProductDto, ProductDetailDto, ProductDto, ProductSearchDto, ProductsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::product::{CreateProductParam, ProductSearchParam},
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// List the logged-in seller's products.
///
/// All filters are optional. Results are paginated with a 1-based `pg`.
///
/// # Access Control
/// - Logged-in user
///
/// # Arguments
/// - `params` - Filters, sort order and pagination
///
/// # Returns
/// - `200 OK` - One page of products and the total match count
/// - `400 Bad Request` - Unknown sort or zero page size
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/product/myProducts",
    tag = PRODUCT_TAG,
    params(ProductSearchDto),
    responses(
        (status = 200, description = "Page of the seller's products", body = ProductsDto),
        (status = 400, description = "Invalid search parameters", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_products(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ProductSearchDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = ProductSearchParam::from_dto(user.login_no, params)?;
    let page = ProductService::new(&state.db).my_products(param).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Register a product for the logged-in seller.
///
/// The item code is generated by the server. New products start on sale, displayed and
/// not deleted.
#[utoipa::path(
    post,
    path = "/product/insert",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn insert(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateProductParam::from_dto(user.login_no, payload)?;
    let product = ProductService::new(&state.db).insert(param).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Get a single product with its fulfilled order quantity.
///
/// Deleted products are reported as missing.
#[utoipa::path(
    get,
    path = "/product/{item_cd}",
    tag = PRODUCT_TAG,
    params(
        ("item_cd" = String, Path, description = "Item code")
    ),
    responses(
        (status = 200, description = "Product detail", body = ProductDetailDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detail(
    State(state): State<AppState>,
    Path(item_cd): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service
        .detail(&item_cd)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", item_cd)))?;
    let order_cnt = service.ordered_count(&item_cd).await?;

    Ok((
        StatusCode::OK,
        Json(ProductDetailDto {
            product: product.into_dto(),
            order_cnt,
        }),
    ))
}
