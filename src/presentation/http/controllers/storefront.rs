// src/presentation/http/controllers/storefront.rs
use crate::application::{
    dto::{CategoryDetailDto, CategoryDto, ContentBlockDto, ProductDto},
    queries::ListProductsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Restrict the listing to one category, by its slug.
    #[serde(default)]
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Categories in shelf order.", body = [CategoryDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Storefront"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .storefront
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug, Hebrew letters allowed")),
    responses(
        (status = 200, description = "Category with its active products.", body = CategoryDetailDto),
        (status = 404, description = "No category with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Storefront"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDetailDto>> {
    state
        .services
        .storefront
        .get_category_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Active products ordered by name.", body = [ProductDto]),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Storefront"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ProductListParams>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    let query = ListProductsQuery {
        category_slug: params.category,
    };

    state
        .services
        .storefront
        .list_products(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product page data.", body = ProductDto),
        (status = 404, description = "Unknown or inactive product.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Storefront"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .storefront
        .get_product_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/content/{slug}",
    params(("slug" = String, Path, description = "Content block slug")),
    responses(
        (status = 200, description = "Content block.", body = ContentBlockDto),
        (status = 404, description = "No content block with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Storefront"
)]
pub async fn get_content_block(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ContentBlockDto>> {
    state
        .services
        .storefront
        .get_content_block(&slug)
        .await
        .into_http()
        .map(Json)
}
