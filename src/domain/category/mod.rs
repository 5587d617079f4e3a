pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId, CategoryUpdate, NewCategory};
pub use repository::CategoryRepository;
