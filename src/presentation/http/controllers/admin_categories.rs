// src/presentation/http/controllers/admin_categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::CategoryDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuth;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    /// Optional override; derived from `name` when absent or blank.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// Blank regenerates the slug from the name.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/categories",
    responses(
        (status = 200, description = "All categories.", body = [CategoryDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    AdminAuth(_admin): AdminAuth,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .back_office
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    AdminAuth(admin): AdminAuth,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let command = CreateCategoryCommand {
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        image_url: payload.image_url,
        sort_order: payload.sort_order,
    };

    let created = state
        .services
        .category_commands
        .create_category(&admin, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    AdminAuth(admin): AdminAuth,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        image_url: payload.image_url,
        sort_order: payload.sort_order,
    };

    state
        .services
        .category_commands
        .update_category(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category deleted; its products become uncategorised.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    AdminAuth(admin): AdminAuth,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .category_commands
        .delete_category(&admin, DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
