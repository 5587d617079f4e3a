pub mod admin;
pub mod catalog;

pub use admin::AdminPrincipal;
pub use catalog::{CategoryDetailDto, CategoryDto, ContentBlockDto, ProductDto, SlugPreviewDto};
