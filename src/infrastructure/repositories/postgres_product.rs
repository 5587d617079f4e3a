// src/infrastructure/repositories/postgres_product.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    NewProduct, Price, Product, ProductFilter, ProductId, ProductRepository, ProductUpdate,
    SaleUnit,
};
use crate::domain::slug::Slug;
use crate::domain::value_objects::{DisplayName, ImageUrl};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, slug, description, price_agorot, unit, category_id, image_url, \
                       in_stock, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    price_agorot: i64,
    unit: String,
    category_id: Option<i64>,
    image_url: Option<String>,
    in_stock: bool,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            price: Price::from_agorot(row.price_agorot)?,
            unit: row.unit.parse::<SaleUnit>()?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            image_url: row.image_url.map(ImageUrl::new).transpose()?,
            in_stock: row.in_stock,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            name,
            slug,
            description,
            price,
            unit,
            category_id,
            image_url,
            in_stock,
            is_active,
            created_at,
            updated_at,
        } = product;

        let sql = format!(
            "INSERT INTO products (name, slug, description, price_agorot, unit, category_id, image_url,
                                   in_stock, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(name.as_str())
            .bind(slug.as_str())
            .bind(description)
            .bind(price.agorot())
            .bind(unit.as_str())
            .bind(category_id.map(i64::from))
            .bind(image_url.map(ImageUrl::into_inner))
            .bind(in_stock)
            .bind(is_active)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            id,
            name,
            slug,
            description,
            price,
            unit,
            category_id,
            image_url,
            in_stock,
            is_active,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE products SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(price) = price {
            builder.push(", price_agorot = ");
            builder.push_bind(price.agorot());
        }
        if let Some(unit) = unit {
            builder.push(", unit = ");
            builder.push_bind(unit.as_str());
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category_id.map(i64::from));
        }
        if let Some(image_url) = image_url {
            builder.push(", image_url = ");
            builder.push_bind(image_url.map(ImageUrl::into_inner));
        }
        if let Some(in_stock) = in_stock {
            builder.push(", in_stock = ");
            builder.push_bind(in_stock);
        }
        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let row = builder
            .build_query_as::<ProductRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        Product::try_from(row)
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE slug = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn list(&self, filter: ProductFilter) -> DomainResult<Vec<Product>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM products WHERE TRUE");

        if filter.active_only {
            builder.push(" AND is_active = TRUE");
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if filter.active_only {
            builder.push(" ORDER BY name ASC, id ASC");
        } else {
            builder.push(" ORDER BY created_at DESC, id DESC");
        }

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }
}
