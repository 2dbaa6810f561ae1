//! Candidate profile models
//!
//! Field names stay camelCase on the wire; the frontend submits and reads
//! records in that shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Candidate record as stored and returned by the API
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub current_location: String,
    pub pan_number: Option<String>,
    pub highest_education: String,
    pub passed_out_year: String,
    pub skill: String,
    pub is_fresher: String,
    pub total_experience: Option<String>,
    pub relevant_experience: Option<String>,
    pub current_company: Option<String>,
    pub previous_companies: Option<String>,
    pub is_currently_working: Option<String>,
    #[serde(rename = "currentCTC")]
    pub current_ctc: Option<String>,
    #[serde(rename = "expectedCTC")]
    pub expected_ctc: Option<String>,
    pub notice_period: Option<String>,
    pub has_form16: Option<String>,
    #[serde(rename = "hasPF")]
    pub has_pf: Option<String>,
    pub career_gaps: Option<String>,
    pub overlaps: Option<String>,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub is_viewed: bool,
}

/// Candidate submission payload
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidateRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub mobile_number: String,
    pub current_location: String,
    pub pan_number: Option<String>,
    pub highest_education: String,
    pub passed_out_year: String,
    pub skill: String,
    pub is_fresher: String,
    pub total_experience: Option<String>,
    pub relevant_experience: Option<String>,
    pub current_company: Option<String>,
    pub previous_companies: Option<String>,
    pub is_currently_working: Option<String>,
    #[serde(rename = "currentCTC")]
    pub current_ctc: Option<String>,
    #[serde(rename = "expectedCTC")]
    pub expected_ctc: Option<String>,
    pub notice_period: Option<String>,
    pub has_form16: Option<String>,
    #[serde(rename = "hasPF")]
    pub has_pf: Option<String>,
    pub career_gaps: Option<String>,
    pub overlaps: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "Pending".to_string()
}
