//! Password hashing and verification
//!
//! Wraps bcrypt with the policy this service needs: salted one-way
//! digests, and verification that fails closed on malformed input.

use bcrypt::DEFAULT_COST;
use thiserror::Error;

/// Password hashing errors
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Hash a plaintext password into a salted bcrypt digest.
///
/// The salt is randomized per call, so hashing the same plaintext twice
/// yields two different digests that both verify.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    bcrypt::hash(plaintext, DEFAULT_COST).map_err(|e| PasswordError::HashingFailed(e.to_string()))
}

/// Verify a plaintext password against a stored digest.
///
/// Returns `false` for a non-matching password and for a malformed
/// digest. A digest we cannot parse is treated as a non-match, never
/// surfaced as an error to the caller.
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}
