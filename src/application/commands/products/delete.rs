use super::ProductCommandService;
use crate::{
    application::{
        dto::AdminPrincipal,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

pub struct DeleteProductCommand {
    pub id: i64,
}

impl ProductCommandService {
    pub async fn delete_product(
        &self,
        actor: &AdminPrincipal,
        command: DeleteProductCommand,
    ) -> ApplicationResult<()> {
        let id = ProductId::new(command.id)?;
        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        self.repo.delete(id).await?;
        tracing::info!(
            admin = %actor.name,
            product_id = command.id,
            slug = %product.slug,
            "product deleted"
        );
        Ok(())
    }
}
