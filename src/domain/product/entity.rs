// src/domain/product/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::product::value_objects::{Price, ProductId, SaleUnit};
use crate::domain::slug::Slug;
use crate::domain::value_objects::{DisplayName, ImageUrl};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Option<String>,
    pub price: Price,
    pub unit: SaleUnit,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<ImageUrl>,
    pub in_stock: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Inactive products are hidden from the storefront.
    pub fn is_visible(&self) -> bool {
        self.is_active
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Option<String>,
    pub price: Price,
    pub unit: SaleUnit,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<ImageUrl>,
    pub in_stock: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: Option<DisplayName>,
    pub slug: Option<Slug>,
    pub description: Option<Option<String>>,
    pub price: Option<Price>,
    pub unit: Option<SaleUnit>,
    pub category_id: Option<Option<CategoryId>>,
    pub image_url: Option<Option<ImageUrl>>,
    pub in_stock: Option<bool>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ProductUpdate {
    pub fn new(id: ProductId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            price: None,
            unit: None,
            category_id: None,
            image_url: None,
            in_stock: None,
            is_active: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: DisplayName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_unit(mut self, unit: SaleUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_image_url(mut self, image_url: Option<ImageUrl>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(slug) = &self.slug {
            product.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(unit) = self.unit {
            product.unit = unit;
        }
        if let Some(category_id) = self.category_id {
            product.category_id = category_id;
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
        product.updated_at = self.updated_at;
    }
}
