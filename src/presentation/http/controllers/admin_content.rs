// src/presentation/http/controllers/admin_content.rs
use crate::application::{
    commands::content::{
        CreateContentBlockCommand, DeleteContentBlockCommand, UpdateContentBlockCommand,
    },
    dto::ContentBlockDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuth;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContentBlockRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateContentBlockRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/content",
    responses(
        (status = 200, description = "All content blocks.", body = [ContentBlockDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_content_blocks(
    Extension(state): Extension<HttpState>,
    AdminAuth(_admin): AdminAuth,
) -> HttpResult<Json<Vec<ContentBlockDto>>> {
    state
        .services
        .back_office
        .list_content_blocks()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/content",
    request_body = CreateContentBlockRequest,
    responses(
        (status = 201, description = "Content block created.", body = ContentBlockDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_content_block(
    Extension(state): Extension<HttpState>,
    AdminAuth(admin): AdminAuth,
    Json(payload): Json<CreateContentBlockRequest>,
) -> HttpResult<(StatusCode, Json<ContentBlockDto>)> {
    let command = CreateContentBlockCommand {
        title: payload.title,
        slug: payload.slug,
        body: payload.body,
    };

    let created = state
        .services
        .content_commands
        .create_content_block(&admin, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/content/{id}",
    params(("id" = i64, Path, description = "Content block identifier")),
    request_body = UpdateContentBlockRequest,
    responses(
        (status = 200, description = "Content block updated.", body = ContentBlockDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Content block not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_content_block(
    Extension(state): Extension<HttpState>,
    AdminAuth(admin): AdminAuth,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContentBlockRequest>,
) -> HttpResult<Json<ContentBlockDto>> {
    let command = UpdateContentBlockCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        body: payload.body,
    };

    state
        .services
        .content_commands
        .update_content_block(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/content/{id}",
    params(("id" = i64, Path, description = "Content block identifier")),
    responses(
        (status = 200, description = "Content block deleted.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Content block not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_content_block(
    Extension(state): Extension<HttpState>,
    AdminAuth(admin): AdminAuth,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .content_commands
        .delete_content_block(&admin, DeleteContentBlockCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
