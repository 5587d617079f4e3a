// src/presentation/http/controllers/admin_products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    dto::ProductDto,
};
use crate::presentation::http::controllers::double_option;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuth;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price_agorot: i64,
    /// `unit` (default) or `kg`.
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_agorot: Option<i64>,
    #[serde(default)]
    pub unit: Option<String>,
    /// `null` detaches the product from its category; absent leaves it unchanged.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<i64>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/products",
    responses(
        (status = 200, description = "All products, newest first, inactive included.", body = [ProductDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    AdminAuth(_admin): AdminAuth,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .back_office
        .list_products()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created.", body = ProductDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Referenced category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    AdminAuth(admin): AdminAuth,
    Json(payload): Json<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let command = CreateProductCommand {
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        price_agorot: payload.price_agorot,
        unit: payload.unit,
        category_id: payload.category_id,
        image_url: payload.image_url,
        in_stock: payload.in_stock,
        is_active: payload.is_active,
    };

    let created = state
        .services
        .product_commands
        .create_product(&admin, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated.", body = ProductDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product or category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    AdminAuth(admin): AdminAuth,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    let command = UpdateProductCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        price_agorot: payload.price_agorot,
        unit: payload.unit,
        category_id: payload.category_id,
        image_url: payload.image_url,
        in_stock: payload.in_stock,
        is_active: payload.is_active,
    };

    state
        .services
        .product_commands
        .update_product(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product deleted.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    AdminAuth(admin): AdminAuth,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .product_commands
        .delete_product(&admin, DeleteProductCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
