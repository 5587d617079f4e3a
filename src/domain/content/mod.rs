pub mod entity;
pub mod repository;

pub use entity::{ContentBlock, ContentBlockId, ContentBlockUpdate, NewContentBlock};
pub use repository::ContentBlockRepository;
