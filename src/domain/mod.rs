pub mod category;
pub mod content;
pub mod errors;
pub mod product;
pub mod services;
pub mod slug;
pub mod value_objects;
