use super::ProductCommandService;
use crate::{
    application::{
        commands::slug_for_update,
        dto::{AdminPrincipal, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        product::{Price, ProductId, ProductUpdate, SaleUnit},
        services::CatalogKind,
        value_objects::{DisplayName, ImageUrl, non_blank},
    },
};

#[derive(Default)]
pub struct UpdateProductCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price_agorot: Option<i64>,
    pub unit: Option<String>,
    /// `Some(None)` detaches the product from its category.
    pub category_id: Option<Option<i64>>,
    pub image_url: Option<String>,
    pub in_stock: Option<bool>,
    pub is_active: Option<bool>,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        actor: &AdminPrincipal,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let id = ProductId::new(command.id)?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let mut update = ProductUpdate::new(id, self.clock.now());

        let name = command.name.map(DisplayName::new).transpose()?;
        let effective_name = name.clone().unwrap_or_else(|| existing.name.clone());
        if let Some(name) = name {
            update = update.with_name(name);
        }

        if let Some(slug) = slug_for_update(
            &self.slug_service,
            CatalogKind::Product,
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
        if let Some(agorot) = command.price_agorot {
            update = update.with_price(Price::from_agorot(agorot)?);
        }
        if let Some(unit) = command.unit {
            update = update.with_unit(unit.parse::<SaleUnit>()?);
        }
        if let Some(category_id) = command.category_id {
            update = update.with_category(self.existing_category(category_id).await?);
        }
        if let Some(image_url) = command.image_url {
            update = update.with_image_url(ImageUrl::parse_optional(Some(image_url))?);
        }
        if let Some(in_stock) = command.in_stock {
            update = update.with_in_stock(in_stock);
        }
        if let Some(is_active) = command.is_active {
            update = update.with_active(is_active);
        }

        let updated = self.repo.update(update).await?;
        tracing::info!(
            admin = %actor.name,
            product_id = command.id,
            slug = %updated.slug,
            "product updated"
        );
        Ok(updated.into())
    }
}
