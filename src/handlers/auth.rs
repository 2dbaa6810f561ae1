//! Authentication HTTP handlers
//!
//! Registration and login endpoints.

use axum::{extract::State, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{AccountResponse, LoginRequest, LoginResponse, RegisterRequest};
use crate::state::AppState;

/// POST /register - Create a new account
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    req.validate()?;

    let account = state
        .auth_service
        .register(&req.email, &req.password, req.role.unwrap_or_default())
        .await?;

    Ok(Json(account.into()))
}

/// POST /login - Verify credentials and issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (account, token) = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse::for_account(&account, token)))
}
