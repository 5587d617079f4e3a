// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        commands::slug_for_new,
        dto::{AdminPrincipal, CategoryDto},
        error::ApplicationResult,
    },
    domain::{
        category::NewCategory,
        services::CatalogKind,
        value_objects::{DisplayName, ImageUrl, non_blank},
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AdminPrincipal,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = DisplayName::new(command.name)?;
        let image_url = ImageUrl::parse_optional(command.image_url)?;
        let slug = slug_for_new(
            &self.slug_service,
            CatalogKind::Category,
            command.slug.as_deref(),
            &name,
        )
        .await?;
        let now = self.clock.now();

        let new_category = NewCategory {
            name,
            slug,
            description: non_blank(command.description),
            image_url,
            sort_order: command.sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(new_category).await?;
        tracing::info!(
            admin = %actor.name,
            category_id = i64::from(created.id),
            slug = %created.slug,
            "category created"
        );
        Ok(created.into())
    }
}
