// src/application/commands/content.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{slug_for_new, slug_for_update},
        dto::{AdminPrincipal, ContentBlockDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::{ContentBlockId, ContentBlockRepository, ContentBlockUpdate, NewContentBlock},
        services::{CatalogKind, CatalogSlugService},
        value_objects::DisplayName,
    },
};

pub struct CreateContentBlockCommand {
    pub title: String,
    pub slug: Option<String>,
    pub body: String,
}

pub struct UpdateContentBlockCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
}

pub struct DeleteContentBlockCommand {
    pub id: i64,
}

pub struct ContentCommandService {
    repo: Arc<dyn ContentBlockRepository>,
    slug_service: Arc<CatalogSlugService>,
    clock: Arc<dyn Clock>,
}

impl ContentCommandService {
    pub fn new(
        repo: Arc<dyn ContentBlockRepository>,
        slug_service: Arc<CatalogSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_content_block(
        &self,
        actor: &AdminPrincipal,
        command: CreateContentBlockCommand,
    ) -> ApplicationResult<ContentBlockDto> {
        let title = DisplayName::new(command.title)?;
        let slug = slug_for_new(
            &self.slug_service,
            CatalogKind::ContentBlock,
            command.slug.as_deref(),
            &title,
        )
        .await?;
        let now = self.clock.now();

        let created = self
            .repo
            .insert(NewContentBlock {
                title,
                slug,
                body: command.body,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            admin = %actor.name,
            content_id = i64::from(created.id),
            slug = %created.slug,
            "content block created"
        );
        Ok(created.into())
    }

    pub async fn update_content_block(
        &self,
        actor: &AdminPrincipal,
        command: UpdateContentBlockCommand,
    ) -> ApplicationResult<ContentBlockDto> {
        let id = ContentBlockId::new(command.id)?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content block not found"))?;

        let mut update = ContentBlockUpdate::new(id, self.clock.now());

        let title = command.title.map(DisplayName::new).transpose()?;
        let effective_title = title.clone().unwrap_or_else(|| existing.title.clone());
        if let Some(title) = title {
            update = update.with_title(title);
        }

        if let Some(slug) = slug_for_update(
            &self.slug_service,
            CatalogKind::ContentBlock,
            command.slug.as_deref(),
            &effective_title,
            command.id,
        )
        .await?
        {
            update = update.with_slug(slug);
        }

        if let Some(body) = command.body {
            update = update.with_body(body);
        }

        let updated = self.repo.update(update).await?;
        tracing::info!(
            admin = %actor.name,
            content_id = command.id,
            slug = %updated.slug,
            "content block updated"
        );
        Ok(updated.into())
    }

    pub async fn delete_content_block(
        &self,
        actor: &AdminPrincipal,
        command: DeleteContentBlockCommand,
    ) -> ApplicationResult<()> {
        let id = ContentBlockId::new(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(admin = %actor.name, content_id = command.id, "content block deleted");
        Ok(())
    }
}
