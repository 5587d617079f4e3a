// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, content::ContentCommandService,
            products::ProductCommandService,
        },
        dto::AdminPrincipal,
        ports::{security::AdminAuthenticator, time::Clock, util::SlugGenerator},
        queries::{BackOfficeQueryService, StorefrontQueryService},
        ApplicationResult,
    },
    domain::{
        category::CategoryRepository,
        content::ContentBlockRepository,
        product::ProductRepository,
        services::{CatalogSlugService, RepositorySlugOwnership},
    },
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub product_commands: Arc<ProductCommandService>,
    pub content_commands: Arc<ContentCommandService>,
    pub storefront: Arc<StorefrontQueryService>,
    pub back_office: Arc<BackOfficeQueryService>,
    slug_service: Arc<CatalogSlugService>,
    authenticator: Arc<dyn AdminAuthenticator>,
}

impl ApplicationServices {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
        content_repo: Arc<dyn ContentBlockRepository>,
        authenticator: Arc<dyn AdminAuthenticator>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let ownership = Arc::new(RepositorySlugOwnership::new(
            Arc::clone(&category_repo),
            Arc::clone(&product_repo),
            Arc::clone(&content_repo),
        ));
        let slug_service = Arc::new(CatalogSlugService::new(
            ownership,
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_repo),
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&content_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let storefront = Arc::new(StorefrontQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&product_repo),
            Arc::clone(&content_repo),
        ));
        let back_office = Arc::new(BackOfficeQueryService::new(
            category_repo,
            product_repo,
            content_repo,
        ));

        Self {
            category_commands,
            product_commands,
            content_commands,
            storefront,
            back_office,
            slug_service,
            authenticator,
        }
    }

    /// Slug an admin form should pre-fill for `text`. Uniqueness is settled
    /// on save, not here.
    pub fn preview_slug(&self, text: &str) -> String {
        self.slug_service.preview(text)
    }

    pub async fn authenticate_admin(&self, token: &str) -> ApplicationResult<AdminPrincipal> {
        self.authenticator.authenticate(token).await
    }
}
