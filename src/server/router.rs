use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{order, product, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Market API", description = "Products, accounts and orders"),
    tags(
        (name = "product", description = "Seller product management"),
        (name = "user", description = "Accounts, sessions and push tokens"),
        (name = "order", description = "Order placement and lifecycle"),
    )
)]
struct ApiDoc;

/// Builds every API route and serves the generated OpenAPI document at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(product::my_products))
        .routes(routes!(product::insert))
        .routes(routes!(product::detail))
        .routes(routes!(user::my_info))
        .routes(routes!(user::duplicated))
        .routes(routes!(user::sign_up))
        .routes(routes!(user::login))
        .routes(routes!(user::logout))
        .routes(routes!(user::update_password))
        .routes(routes!(user::update_profile))
        .routes(routes!(user::delete))
        .routes(routes!(user::add_token))
        .routes(routes!(order::place))
        .routes(routes!(order::my_orders))
        .routes(routes!(order::update_status))
        .routes(routes!(order::history))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
