// src/domain/content/entity.rs
//! Editable storefront copy: banners, the about page, delivery notes.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::value_objects::DisplayName;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentBlockId(pub i64);

impl ContentBlockId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "content block id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContentBlockId> for i64 {
    fn from(value: ContentBlockId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct ContentBlock {
    pub id: ContentBlockId,
    pub title: DisplayName,
    pub slug: Slug,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContentBlock {
    pub title: DisplayName,
    pub slug: Slug,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContentBlockUpdate {
    pub id: ContentBlockId,
    pub title: Option<DisplayName>,
    pub slug: Option<Slug>,
    pub body: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ContentBlockUpdate {
    pub fn new(id: ContentBlockId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: DisplayName) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn apply_to(&self, block: &mut ContentBlock) {
        if let Some(title) = &self.title {
            block.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            block.slug = slug.clone();
        }
        if let Some(body) = &self.body {
            block.body = body.clone();
        }
        block.updated_at = self.updated_at;
    }
}
