// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{category::CategoryRepository, services::CatalogSlugService},
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<CatalogSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<CatalogSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }
}
