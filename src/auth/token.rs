//! Access token issuance and verification
//!
//! Tokens are stateless signed JWTs carrying `{sub, role, exp}`. There is
//! no server-side session table: a token stays valid until its natural
//! expiry, which is the accepted trade-off of the self-verifying design.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::AccountRole;

/// Default access token lifetime in minutes
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Token errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,
}

/// JWT claims carried by an access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,
    /// Account role
    pub role: String,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Issues and verifies signed access tokens.
///
/// The signing secret is injected at construction and fixed for the
/// lifetime of the process; there is no runtime rotation.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a signed token for `subject` with the given role and lifetime.
    pub fn issue(
        &self,
        subject: &str,
        role: AccountRole,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            role: role.as_str().to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// Any failure (tampered signature, malformed token, past `exp`)
    /// yields an error, never a partially trusted result.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let tokens = TokenService::new("test-secret-key");

        let token = tokens
            .issue("alice@example.com", AccountRole::Candidate, Duration::minutes(30))
            .unwrap();
        assert!(!token.is_empty());

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.role, "candidate");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = TokenService::new("test-secret-key");

        let token = tokens
            .issue("alice@example.com", AccountRole::Admin, Duration::minutes(-5))
            .unwrap();

        assert!(matches!(tokens.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let tokens = TokenService::new("secret-one");
        let other = TokenService::new("secret-two");

        let token = tokens
            .issue("alice@example.com", AccountRole::Admin, Duration::minutes(30))
            .unwrap();

        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let tokens = TokenService::new("test-secret-key");
        assert!(matches!(
            tokens.verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let tokens = TokenService::new("test-secret-key");
        let token = tokens
            .issue("alice@example.com", AccountRole::Candidate, Duration::minutes(30))
            .unwrap();

        // Flip the payload segment
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = format!("{}x", parts[1]);
        parts[1] = &forged;
        let tampered = parts.join(".");

        assert!(tokens.verify(&tampered).is_err());
    }
}
