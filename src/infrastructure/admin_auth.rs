// src/infrastructure/admin_auth.rs
use crate::application::{
    dto::AdminPrincipal,
    error::{ApplicationError, ApplicationResult},
    ports::security::AdminAuthenticator,
};
use async_trait::async_trait;
use sha2::{Digest, Sha256};

/// Accepts a single shared back-office token, configured at startup.
///
/// Only the SHA-256 digest is kept in memory, and presented tokens are
/// compared digest to digest.
#[derive(Clone)]
pub struct StaticTokenAuthenticator {
    token_digest: Vec<u8>,
    principal: String,
}

impl StaticTokenAuthenticator {
    pub fn new(token: &str) -> Self {
        Self {
            token_digest: Sha256::digest(token.as_bytes()).to_vec(),
            principal: "admin".into(),
        }
    }

    pub fn with_principal(mut self, name: impl Into<String>) -> Self {
        self.principal = name.into();
        self
    }
}

#[async_trait]
impl AdminAuthenticator for StaticTokenAuthenticator {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AdminPrincipal> {
        let presented = Sha256::digest(token.as_bytes());
        if presented.as_slice() != self.token_digest.as_slice() {
            tracing::warn!("rejected admin token");
            return Err(ApplicationError::unauthorized("invalid admin token"));
        }
        Ok(AdminPrincipal::new(self.principal.clone()))
    }
}
