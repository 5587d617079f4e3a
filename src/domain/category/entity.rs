// src/domain/category/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::value_objects::{DisplayName, ImageUrl};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "category id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Option<String>,
    pub image_url: Option<ImageUrl>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Option<String>,
    pub image_url: Option<ImageUrl>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update. `Some(None)` on an optional column clears it.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<DisplayName>,
    pub slug: Option<Slug>,
    pub description: Option<Option<String>>,
    pub image_url: Option<Option<ImageUrl>>,
    pub sort_order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            image_url: None,
            sort_order: None,
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

    pub fn with_image_url(mut self, image_url: Option<ImageUrl>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Applies the update to an in-memory copy of the record.
    pub fn apply_to(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(slug) = &self.slug {
            category.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            category.description = description.clone();
        }
        if let Some(image_url) = &self.image_url {
            category.image_url = image_url.clone();
        }
        if let Some(sort_order) = self.sort_order {
            category.sort_order = sort_order;
        }
        category.updated_at = self.updated_at;
    }
}
