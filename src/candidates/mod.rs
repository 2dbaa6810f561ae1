//! Candidate record service
//!
//! Persistence for applicant profile submissions: public create, admin
//! list, and the mark-viewed triage flag.

use chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Candidate, CreateCandidateRequest};

/// Candidate service errors
#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for CandidateError {
    fn from(e: sqlx::Error) -> Self {
        CandidateError::Database(e.to_string())
    }
}

/// Candidate record service
#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new candidate submission.
    pub async fn create(&self, req: CreateCandidateRequest) -> Result<Candidate, CandidateError> {
        let candidate = Candidate {
            id: Uuid::new_v4(),
            name: req.name,
            email: req.email,
            mobile_number: req.mobile_number,
            current_location: req.current_location,
            pan_number: req.pan_number,
            highest_education: req.highest_education,
            passed_out_year: req.passed_out_year,
            skill: req.skill,
            is_fresher: req.is_fresher,
            total_experience: req.total_experience,
            relevant_experience: req.relevant_experience,
            current_company: req.current_company,
            previous_companies: req.previous_companies,
            is_currently_working: req.is_currently_working,
            current_ctc: req.current_ctc,
            expected_ctc: req.expected_ctc,
            notice_period: req.notice_period,
            has_form16: req.has_form16,
            has_pf: req.has_pf,
            career_gaps: req.career_gaps,
            overlaps: req.overlaps,
            status: req.status,
            submitted_at: Utc::now(),
            is_viewed: false,
        };

        sqlx::query(
            r#"
            INSERT INTO candidates (
                id, name, email, mobile_number, current_location, pan_number,
                highest_education, passed_out_year, skill, is_fresher,
                total_experience, relevant_experience, current_company,
                previous_companies, is_currently_working, current_ctc,
                expected_ctc, notice_period, has_form16, has_pf, career_gaps,
                overlaps, status, submitted_at, is_viewed
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25
            )
            "#,
        )
        .bind(candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.mobile_number)
        .bind(&candidate.current_location)
        .bind(&candidate.pan_number)
        .bind(&candidate.highest_education)
        .bind(&candidate.passed_out_year)
        .bind(&candidate.skill)
        .bind(&candidate.is_fresher)
        .bind(&candidate.total_experience)
        .bind(&candidate.relevant_experience)
        .bind(&candidate.current_company)
        .bind(&candidate.previous_companies)
        .bind(&candidate.is_currently_working)
        .bind(&candidate.current_ctc)
        .bind(&candidate.expected_ctc)
        .bind(&candidate.notice_period)
        .bind(&candidate.has_form16)
        .bind(&candidate.has_pf)
        .bind(&candidate.career_gaps)
        .bind(&candidate.overlaps)
        .bind(&candidate.status)
        .bind(candidate.submitted_at)
        .bind(candidate.is_viewed)
        .execute(&self.pool)
        .await?;

        Ok(candidate)
    }

    /// List all candidate records, newest first.
    pub async fn list(&self) -> Result<Vec<Candidate>, CandidateError> {
        let candidates: Vec<Candidate> = sqlx::query_as(
            r#"
            SELECT id, name, email, mobile_number, current_location, pan_number,
                   highest_education, passed_out_year, skill, is_fresher,
                   total_experience, relevant_experience, current_company,
                   previous_companies, is_currently_working, current_ctc,
                   expected_ctc, notice_period, has_form16, has_pf, career_gaps,
                   overlaps, status, submitted_at, is_viewed
            FROM candidates
            ORDER BY submitted_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(candidates)
    }

    /// Flag a candidate record as viewed. Returns `false` when the record
    /// does not exist or was already flagged.
    pub async fn mark_viewed(&self, id: Uuid) -> Result<bool, CandidateError> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE candidates
            SET is_viewed = TRUE
            WHERE id = $1 AND is_viewed = FALSE
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected == 1)
    }
}
