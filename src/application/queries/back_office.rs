use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, ContentBlockDto, ProductDto},
        error::ApplicationResult,
    },
    domain::{
        category::CategoryRepository,
        content::ContentBlockRepository,
        product::{ProductFilter, ProductRepository},
    },
};

/// Admin listings. Unlike the storefront, inactive products are included.
pub struct BackOfficeQueryService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
    content: Arc<dyn ContentBlockRepository>,
}

impl BackOfficeQueryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
        content: Arc<dyn ContentBlockRepository>,
    ) -> Self {
        Self {
            categories,
            products,
            content,
        }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn list_products(&self) -> ApplicationResult<Vec<ProductDto>> {
        let products = self.products.list(ProductFilter::default()).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    pub async fn list_content_blocks(&self) -> ApplicationResult<Vec<ContentBlockDto>> {
        let blocks = self.content.list().await?;
        Ok(blocks.into_iter().map(Into::into).collect())
    }
}
