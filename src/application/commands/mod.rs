// src/application/commands/mod.rs
pub mod categories;
pub mod content;
pub mod products;

use crate::application::error::ApplicationResult;
use crate::domain::services::{CatalogKind, CatalogSlugService};
use crate::domain::slug::Slug;
use crate::domain::value_objects::DisplayName;

/// Picks the slug for a newly created record: the admin's own text when the
/// form field was filled in, otherwise one derived from the display name.
pub(crate) async fn slug_for_new(
    slug_service: &CatalogSlugService,
    kind: CatalogKind,
    requested: Option<&str>,
    name: &DisplayName,
) -> ApplicationResult<Slug> {
    let slug = match requested.filter(|s| !s.trim().is_empty()) {
        Some(text) => {
            slug_service
                .normalize_requested_slug(kind, text, None)
                .await?
        }
        None => {
            slug_service
                .generate_unique_slug(kind, name.as_str(), None)
                .await?
        }
    };
    Ok(slug)
}

/// Slug change requested on update. `None` keeps the stored slug; a blank
/// field regenerates it from `name`.
pub(crate) async fn slug_for_update(
    slug_service: &CatalogSlugService,
    kind: CatalogKind,
    requested: Option<&str>,
    name: &DisplayName,
    id: i64,
) -> ApplicationResult<Option<Slug>> {
    let Some(text) = requested else {
        return Ok(None);
    };

    let slug = if text.trim().is_empty() {
        slug_service
            .generate_unique_slug(kind, name.as_str(), Some(id))
            .await?
    } else {
        slug_service
            .normalize_requested_slug(kind, text, Some(id))
            .await?
    };
    Ok(Some(slug))
}
