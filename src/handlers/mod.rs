//! API handlers for the candidate tracker backend

pub mod auth;
pub mod candidates;

pub use auth::{login, register};
pub use candidates::{create_candidate, list_candidates, mark_candidate_viewed};

// Re-export extractors from middleware for handler use
pub use crate::middleware::auth::{AdminUser, AuthenticatedUser};
