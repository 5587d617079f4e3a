// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        product::ProductRepository,
        services::CatalogSlugService,
    },
};

pub struct ProductCommandService {
    pub(super) repo: Arc<dyn ProductRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<CatalogSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    pub fn new(
        repo: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
        slug_service: Arc<CatalogSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            categories,
            slug_service,
            clock,
        }
    }

    pub(super) async fn existing_category(
        &self,
        raw_id: Option<i64>,
    ) -> ApplicationResult<Option<CategoryId>> {
        let Some(raw_id) = raw_id else {
            return Ok(None);
        };
        let id = CategoryId::new(raw_id)?;
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }
        Ok(Some(id))
    }
}
