pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductUpdate};
pub use repository::{ProductFilter, ProductRepository};
pub use value_objects::{Price, ProductId, SaleUnit};
