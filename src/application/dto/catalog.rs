use crate::domain::{category::Category, content::ContentBlock, product::Product};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description,
            image_url: category.image_url.map(|url| url.into_inner()),
            sort_order: category.sort_order,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in agorot.
    pub price_agorot: i64,
    /// `unit` or `kg`.
    pub unit: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub in_stock: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            description: product.description,
            price_agorot: product.price.agorot(),
            unit: product.unit.as_str().to_string(),
            category_id: product.category_id.map(Into::into),
            image_url: product.image_url.map(|url| url.into_inner()),
            in_stock: product.in_stock,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDetailDto {
    pub category: CategoryDto,
    pub products: Vec<ProductDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentBlockDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentBlock> for ContentBlockDto {
    fn from(block: ContentBlock) -> Self {
        Self {
            id: block.id.into(),
            title: block.title.into_inner(),
            slug: block.slug.into_inner(),
            body: block.body,
            created_at: block.created_at,
            updated_at: block.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewDto {
    pub slug: String,
}
