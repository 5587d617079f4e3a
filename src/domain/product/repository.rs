use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductUpdate};
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter {
    pub active_only: bool,
    pub category_id: Option<CategoryId>,
}

impl ProductFilter {
    pub fn storefront() -> Self {
        Self {
            active_only: true,
            category_id: None,
        }
    }

    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        (!self.active_only || product.is_active)
            && self
                .category_id
                .is_none_or(|id| product.category_id == Some(id))
    }
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>>;
    /// Storefront listings are ordered by name, admin listings newest first.
    async fn list(&self, filter: ProductFilter) -> DomainResult<Vec<Product>>;
}
