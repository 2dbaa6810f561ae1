//! Authentication middleware
//!
//! Axum extractors that resolve the bearer token on protected routes to
//! an authenticated principal, and gate admin-only handlers.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::sync::Arc;

use crate::auth::AuthService;
use crate::error::ApiError;
use crate::models::{AccountRole, Principal};

/// Authenticated principal extracted from the bearer token
///
/// Verifies the token and re-resolves the subject against the account
/// directory, so a token for a deleted account is rejected with 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    ApiError::Unauthorized(
                        "Authorization header with Bearer token required".to_string(),
                    )
                    .into_response()
                })?;

        let auth_service = Arc::<AuthService>::from_ref(state);

        let principal = auth_service
            .authenticate(bearer.token())
            .await
            .map_err(|e| ApiError::from(e).into_response())?;

        Ok(AuthenticatedUser(principal))
    }
}

/// Extractor requiring the admin role
///
/// The role check is an exact match on the directory's current role for
/// the account, not the role claim baked into the token.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(principal) =
            AuthenticatedUser::from_request_parts(parts, state).await?;

        principal
            .require_role(AccountRole::Admin)
            .map_err(|e| ApiError::from(e).into_response())?;

        Ok(AdminUser(principal))
    }
}
