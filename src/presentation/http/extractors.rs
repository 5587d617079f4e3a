// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AdminPrincipal, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Admin caller, resolved from `Authorization: Bearer <ADMIN_API_TOKEN>`.
#[derive(Debug, Clone)]
pub struct AdminAuth(pub AdminPrincipal);

impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let principal = app_state
            .services
            .authenticate_admin(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(principal))
    }
}
