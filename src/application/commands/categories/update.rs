use super::CategoryCommandService;
use crate::{
    application::{
        commands::slug_for_update,
        dto::{AdminPrincipal, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryId, CategoryUpdate},
        services::CatalogKind,
        value_objects::{DisplayName, ImageUrl, non_blank},
    },
};

/// `None` leaves a field untouched. Blank `description` / `image_url` clear
/// the stored value; a blank `slug` regenerates it from the name.
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AdminPrincipal,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let mut update = CategoryUpdate::new(id, self.clock.now());

        let name = command.name.map(DisplayName::new).transpose()?;
        let effective_name = name.clone().unwrap_or_else(|| existing.name.clone());
        if let Some(name) = name {
            update = update.with_name(name);
        }

        if let Some(slug) = slug_for_update(
            &self.slug_service,
            CatalogKind::Category,
            command.slug.as_deref(),
            &effective_name,
            command.id,
        )
        .await?
        {
            update = update.with_slug(slug);
        }

        if let Some(description) = command.description {
            update = update.with_description(non_blank(Some(description)));
        }
        if let Some(image_url) = command.image_url {
            update = update.with_image_url(ImageUrl::parse_optional(Some(image_url))?);
        }
        if let Some(sort_order) = command.sort_order {
            update = update.with_sort_order(sort_order);
        }

        let updated = self.repo.update(update).await?;
        tracing::info!(
            admin = %actor.name,
            category_id = command.id,
            slug = %updated.slug,
            "category updated"
        );
        Ok(updated.into())
    }
}
