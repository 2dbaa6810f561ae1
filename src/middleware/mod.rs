//! Middleware for the candidate tracker API
//!
//! Bearer token extraction and role gating for protected routes.

pub mod auth;

pub use auth::{AdminUser, AuthenticatedUser};
