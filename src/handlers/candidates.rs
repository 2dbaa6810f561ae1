//! Candidate HTTP handlers
//!
//! Submission is public; listing and triage are admin-only.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{Candidate, CreateCandidateRequest};
use crate::state::AppState;

use super::AdminUser;

/// POST /candidates - Submit a candidate profile
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(req): Json<CreateCandidateRequest>,
) -> Result<Json<Candidate>, ApiError> {
    req.validate()?;

    let candidate = state
        .candidate_service
        .create(req)
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    Ok(Json(candidate))
}

/// GET /candidates - List all candidate records (admin only)
pub async fn list_candidates(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<Candidate>>, ApiError> {
    let candidates = state
        .candidate_service
        .list()
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    Ok(Json(candidates))
}

/// Message response for triage updates
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// PUT /candidates/:id/mark-viewed - Flag a record as viewed (admin only)
pub async fn mark_candidate_viewed(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let updated = state
        .candidate_service
        .mark_viewed(id)
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    let message = if updated {
        "Candidate marked as viewed"
    } else {
        "Candidate not found or already viewed"
    };

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}
