// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AdminPrincipal};
use async_trait::async_trait;

#[async_trait]
pub trait AdminAuthenticator: Send + Sync {
    /// Resolves a bearer token into the back-office operator it belongs to.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AdminPrincipal>;
}
