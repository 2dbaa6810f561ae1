//! Authentication core for the candidate tracker
//!
//! - Password hashing and verification (bcrypt)
//! - Signed access token issuance and verification (JWT)
//! - Registration, login, per-request authentication, admin bootstrap

mod password;
mod service;
mod token;

pub use password::{hash_password, verify_password};
pub use service::{AuthError, AuthService};
pub use token::{Claims, TokenError, TokenService, DEFAULT_TOKEN_TTL_MINUTES};
