// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_content;
mod postgres_product;

pub(crate) use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_content::PostgresContentBlockRepository;
pub use postgres_product::PostgresProductRepository;
