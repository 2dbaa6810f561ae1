//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthService;
use crate::candidates::CandidateService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub candidate_service: Arc<CandidateService>,
}

impl AppState {
    pub fn new(auth_service: Arc<AuthService>, candidate_service: Arc<CandidateService>) -> Self {
        Self {
            auth_service,
            candidate_service,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<CandidateService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.candidate_service.clone()
    }
}
