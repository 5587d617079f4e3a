// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin_categories, admin_content, admin_products, slugs, storefront},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/categories", get(storefront::list_categories))
        .route("/api/v1/categories/{slug}", get(storefront::get_category))
        .route("/api/v1/products", get(storefront::list_products))
        .route("/api/v1/products/{slug}", get(storefront::get_product))
        .route("/api/v1/content/{slug}", get(storefront::get_content_block))
        .route("/api/v1/admin/slug-preview", post(slugs::preview_slug))
        .route(
            "/api/v1/admin/categories",
            get(admin_categories::list_categories).post(admin_categories::create_category),
        )
        .route(
            "/api/v1/admin/categories/{id}",
            put(admin_categories::update_category).delete(admin_categories::delete_category),
        )
        .route(
            "/api/v1/admin/products",
            get(admin_products::list_products).post(admin_products::create_product),
        )
        .route(
            "/api/v1/admin/products/{id}",
            put(admin_products::update_product).delete(admin_products::delete_product),
        )
        .route(
            "/api/v1/admin/content",
            get(admin_content::list_content_blocks).post(admin_content::create_content_block),
        )
        .route(
            "/api/v1/admin/content/{id}",
            put(admin_content::update_content_block).delete(admin_content::delete_content_block),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse::ok())
}
