// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::AdminPrincipal,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Products in the category stay in the catalog, uncategorised.
    pub async fn delete_category(
        &self,
        actor: &AdminPrincipal,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        let category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.repo.delete(id).await?;
        tracing::info!(
            admin = %actor.name,
            category_id = command.id,
            slug = %category.slug,
            "category deleted"
        );
        Ok(())
    }
}
