// src/presentation/http/openapi.rs
use crate::application::dto::{
    CategoryDetailDto, CategoryDto, ContentBlockDto, ProductDto, SlugPreviewDto,
};
use crate::presentation::http::controllers::{
    admin_categories, admin_content, admin_products, slugs, storefront,
};
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: "deleted".into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        storefront::list_categories,
        storefront::get_category,
        storefront::list_products,
        storefront::get_product,
        storefront::get_content_block,
        slugs::preview_slug,
        admin_categories::list_categories,
        admin_categories::create_category,
        admin_categories::update_category,
        admin_categories::delete_category,
        admin_products::list_products,
        admin_products::create_product,
        admin_products::update_product,
        admin_products::delete_product,
        admin_content::list_content_blocks,
        admin_content::create_content_block,
        admin_content::update_content_block,
        admin_content::delete_content_block,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            CategoryDto,
            CategoryDetailDto,
            ProductDto,
            ContentBlockDto,
            SlugPreviewDto,
            slugs::SlugPreviewRequest,
            storefront::ProductListParams,
            admin_categories::CreateCategoryRequest,
            admin_categories::UpdateCategoryRequest,
            admin_products::CreateProductRequest,
            admin_products::UpdateProductRequest,
            admin_content::CreateContentBlockRequest,
            admin_content::UpdateContentBlockRequest
        )
    ),
    tags(
        (name = "Storefront", description = "Public catalog endpoints"),
        (name = "Admin", description = "Back-office catalog management"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Greengrocer API",
        description = "Hebrew storefront and admin catalog backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
