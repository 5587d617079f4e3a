// src/application/commands/products/create.rs
use super::ProductCommandService;
use crate::{
    application::{
        commands::slug_for_new,
        dto::{AdminPrincipal, ProductDto},
        error::ApplicationResult,
    },
    domain::{
        product::{NewProduct, Price, SaleUnit},
        services::CatalogKind,
        value_objects::{DisplayName, ImageUrl, non_blank},
    },
};

pub struct CreateProductCommand {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price_agorot: i64,
    pub unit: Option<String>,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
    pub in_stock: bool,
    pub is_active: bool,
}

impl CreateProductCommand {
    pub fn builder() -> CreateProductCommandBuilder {
        CreateProductCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateProductCommandBuilder {
    name: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    price_agorot: Option<i64>,
    unit: Option<String>,
    category_id: Option<i64>,
    image_url: Option<String>,
    in_stock: Option<bool>,
    is_active: Option<bool>,
}

impl CreateProductCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price_agorot(mut self, price_agorot: i64) -> Self {
        self.price_agorot = Some(price_agorot);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn build(self) -> Result<CreateProductCommand, &'static str> {
        Ok(CreateProductCommand {
            name: self.name.ok_or("name is required")?,
            slug: self.slug,
            description: self.description,
            price_agorot: self.price_agorot.ok_or("price is required")?,
            unit: self.unit,
            category_id: self.category_id,
            image_url: self.image_url,
            in_stock: self.in_stock.unwrap_or(true),
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        actor: &AdminPrincipal,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let name = DisplayName::new(command.name)?;
        let price = Price::from_agorot(command.price_agorot)?;
        let unit = match command.unit.as_deref() {
            Some(raw) => raw.parse::<SaleUnit>()?,
            None => SaleUnit::default(),
        };
        let image_url = ImageUrl::parse_optional(command.image_url)?;
        let category_id = self.existing_category(command.category_id).await?;
        let slug = slug_for_new(
            &self.slug_service,
            CatalogKind::Product,
            command.slug.as_deref(),
            &name,
        )
        .await?;
        let now = self.clock.now();

        let new_product = NewProduct {
            name,
            slug,
            description: non_blank(command.description),
            price,
            unit,
            category_id,
            image_url,
            in_stock: command.in_stock,
            is_active: command.is_active,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(new_product).await?;
        tracing::info!(
            admin = %actor.name,
            product_id = i64::from(created.id),
            slug = %created.slug,
            "product created"
        );
        Ok(created.into())
    }
}
