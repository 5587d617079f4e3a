// src/application/queries/storefront.rs
//! Read side of the shop. Lookups use the slug stored at write time; nothing
//! here generates slugs.
use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDetailDto, CategoryDto, ContentBlockDto, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{Category, CategoryRepository},
        content::ContentBlockRepository,
        product::{ProductFilter, ProductRepository},
        slug::{Slug, is_valid_slug},
    },
};

pub struct ListProductsQuery {
    pub category_slug: Option<String>,
}

pub struct StorefrontQueryService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
    content: Arc<dyn ContentBlockRepository>,
}

/// Malformed slugs can never match a stored record.
fn lookup_slug(raw: &str, what: &str) -> ApplicationResult<Slug> {
    if !is_valid_slug(raw) {
        return Err(ApplicationError::not_found(format!("{what} not found")));
    }
    Ok(Slug::new(raw)?)
}

impl StorefrontQueryService {
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

    pub async fn get_category_by_slug(&self, slug: &str) -> ApplicationResult<CategoryDetailDto> {
        let category = self.category_by_slug(slug).await?;
        let products = self
            .products
            .list(ProductFilter::storefront().in_category(category.id))
            .await?;

        Ok(CategoryDetailDto {
            category: category.into(),
            products: products.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn list_products(&self, query: ListProductsQuery) -> ApplicationResult<Vec<ProductDto>> {
        let mut filter = ProductFilter::storefront();
        let category_slug = query
            .category_slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty());
        if let Some(slug) = category_slug {
            let category = self.category_by_slug(slug).await?;
            filter = filter.in_category(category.id);
        }

        let products = self.products.list(filter).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    pub async fn get_product_by_slug(&self, slug: &str) -> ApplicationResult<ProductDto> {
        let slug = lookup_slug(slug, "product")?;
        let product = self
            .products
            .find_by_slug(&slug)
            .await?
            .filter(|p| p.is_visible())
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;
        Ok(product.into())
    }

    pub async fn get_content_block(&self, slug: &str) -> ApplicationResult<ContentBlockDto> {
        let slug = lookup_slug(slug, "content block")?;
        let block = self
            .content
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content block not found"))?;
        Ok(block.into())
    }

    async fn category_by_slug(&self, slug: &str) -> ApplicationResult<Category> {
        let slug = lookup_slug(slug, "category")?;
        self.categories
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
