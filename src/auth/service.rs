//! Authentication service
//!
//! Registration, login, per-request authentication and the admin
//! bootstrap. Orchestrates the credential hasher, the token service and
//! the account directory.

use std::sync::Arc;

use chrono::Duration;
use thiserror::Error;

use crate::directory::{AccountDirectory, DirectoryError};
use crate::models::{Account, AccountRole, NewAccount, Principal};

use super::password::{hash_password, verify_password, PasswordError};
use super::token::{TokenError, TokenService};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    Unauthenticated,

    #[error("Not authorized")]
    Forbidden,

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Password hashing error: {0}")]
    Hash(String),

    #[error("Token error: {0}")]
    Token(String),
}

impl From<DirectoryError> for AuthError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::DuplicateEmail => AuthError::DuplicateEmail,
            DirectoryError::Database(msg) => AuthError::Directory(msg),
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(e: PasswordError) -> Self {
        AuthError::Hash(e.to_string())
    }
}

impl Principal {
    /// Require an exact role match. There is no hierarchy: an admin does
    /// not satisfy a candidate requirement, nor the reverse.
    pub fn require_role(&self, role: AccountRole) -> Result<(), AuthError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    directory: Arc<dyn AccountDirectory>,
    tokens: TokenService,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(
        directory: Arc<dyn AccountDirectory>,
        tokens: TokenService,
        token_ttl: Duration,
    ) -> Self {
        Self {
            directory,
            tokens,
            token_ttl,
        }
    }

    /// Register a new account.
    ///
    /// The password is hashed before anything is persisted; the plaintext
    /// never reaches the directory. Fails with `DuplicateEmail` when the
    /// email is already taken.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: AccountRole,
    ) -> Result<Account, AuthError> {
        if self.directory.find_by_email(email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = hash_password(password)?;

        let account = self
            .directory
            .insert(NewAccount {
                email: email.to_string(),
                password_hash,
                role,
            })
            .await?;

        tracing::info!(email = %account.email, role = %account.role.as_str(), "Account registered");

        Ok(account)
    }

    /// Verify credentials and issue an access token.
    ///
    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` error so callers cannot enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<(Account, String), AuthError> {
        let account = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&account.email, account.role, self.token_ttl)
            .map_err(|e| AuthError::Token(e.to_string()))?;

        Ok((account, token))
    }

    /// Resolve a raw bearer token to a principal.
    ///
    /// Token claims alone are not trusted: the subject is re-resolved
    /// against the directory on every call, so a token for a deleted
    /// account is rejected. The principal carries the directory's current
    /// role, not the one baked into the token.
    pub async fn authenticate(&self, raw_token: &str) -> Result<Principal, AuthError> {
        let claims = self.tokens.verify(raw_token).map_err(|e| {
            if matches!(e, TokenError::Expired) {
                tracing::debug!("Rejected expired token");
            }
            AuthError::Unauthenticated
        })?;

        let account = self
            .directory
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        Ok(Principal {
            email: account.email,
            role: account.role,
        })
    }

    /// Create the default admin account if it does not exist yet.
    ///
    /// Idempotent: returns `false` when the account is already present.
    /// A concurrent duplicate insert counts as already seeded.
    pub async fn seed_default_admin(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        if self.directory.find_by_email(email).await?.is_some() {
            tracing::debug!(email = %email, "Default admin already present, skipping seed");
            return Ok(false);
        }

        let password_hash = hash_password(password)?;

        match self
            .directory
            .insert(NewAccount {
                email: email.to_string(),
                password_hash,
                role: AccountRole::Admin,
            })
            .await
        {
            Ok(_) => {
                tracing::info!(email = %email, "Default admin created");
                Ok(true)
            }
            Err(DirectoryError::DuplicateEmail) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
