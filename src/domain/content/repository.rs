use crate::domain::content::entity::{
    ContentBlock, ContentBlockId, ContentBlockUpdate, NewContentBlock,
};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ContentBlockRepository: Send + Sync {
    async fn insert(&self, block: NewContentBlock) -> DomainResult<ContentBlock>;
    async fn update(&self, update: ContentBlockUpdate) -> DomainResult<ContentBlock>;
    async fn delete(&self, id: ContentBlockId) -> DomainResult<()>;
    async fn find_by_id(&self, id: ContentBlockId) -> DomainResult<Option<ContentBlock>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ContentBlock>>;
    async fn list(&self) -> DomainResult<Vec<ContentBlock>>;
}
