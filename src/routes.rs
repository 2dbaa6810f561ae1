//! Route definitions for the candidate tracker API

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::*;
use crate::state::AppState;

// Auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

// Candidate routes
pub fn candidate_routes() -> Router<AppState> {
    Router::new()
        .route("/candidates", post(create_candidate))
        .route("/candidates", get(list_candidates))
        .route("/candidates/:id/mark-viewed", put(mark_candidate_viewed))
}
