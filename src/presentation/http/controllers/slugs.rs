// src/presentation/http/controllers/slugs.rs
use crate::application::dto::SlugPreviewDto;
use crate::presentation::http::extractors::AdminAuth;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlugPreviewRequest {
    pub text: String,
}

/// Live preview for the admin form's slug field.
#[utoipa::path(
    post,
    path = "/api/v1/admin/slug-preview",
    request_body = SlugPreviewRequest,
    responses(
        (status = 200, description = "Slug derived from the text.", body = SlugPreviewDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    AdminAuth(_admin): AdminAuth,
    Json(payload): Json<SlugPreviewRequest>,
) -> Json<SlugPreviewDto> {
    Json(SlugPreviewDto {
        slug: state.services.preview_slug(&payload.text),
    })
}
