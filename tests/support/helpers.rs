// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryCatalog};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use greengrocer::application::{
    dto::AdminPrincipal,
    ports::{security::AdminAuthenticator, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use greengrocer::domain::{
    category::CategoryRepository, content::ContentBlockRepository, product::ProductRepository,
};
use greengrocer::infrastructure::{admin_auth::StaticTokenAuthenticator, util::HebrewSlugGenerator};
use greengrocer::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token-0123456789";

pub fn admin() -> AdminPrincipal {
    AdminPrincipal::new("admin")
}

/// Services wired to one shared in-memory catalog.
pub fn build_test_services() -> (Arc<ApplicationServices>, Arc<InMemoryCatalog>) {
    let catalog = Arc::new(InMemoryCatalog::new());
    let categories: Arc<dyn CategoryRepository> = catalog.clone();
    let products: Arc<dyn ProductRepository> = catalog.clone();
    let content: Arc<dyn ContentBlockRepository> = catalog.clone();
    let authenticator: Arc<dyn AdminAuthenticator> =
        Arc::new(StaticTokenAuthenticator::new(TEST_ADMIN_TOKEN));
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(HebrewSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        categories,
        products,
        content,
        authenticator,
        clock,
        slugger,
    ));
    (services, catalog)
}

pub fn make_test_router() -> axum::Router {
    let (services, _) = build_test_services();
    build_router(
        HttpState { services },
        &["http://localhost:3000".to_string()],
    )
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn admin_request(method: &str, uri: &str, payload: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_ADMIN_TOKEN}"));
    match payload {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
