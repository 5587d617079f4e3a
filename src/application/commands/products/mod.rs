// src/application/commands/products/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateProductCommand, CreateProductCommandBuilder};
pub use delete::DeleteProductCommand;
pub use service::ProductCommandService;
pub use update::UpdateProductCommand;
