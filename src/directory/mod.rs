//! Account directory
//!
//! Persistence boundary for accounts. The directory is the source of
//! truth for account existence: lookups are case-sensitive exact matches
//! on email, and uniqueness is enforced at insert time.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Account, NewAccount};

/// Directory errors
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for DirectoryError {
    fn from(e: sqlx::Error) -> Self {
        DirectoryError::Database(e.to_string())
    }
}

/// Account persistence operations consumed by the auth service.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Exact-match lookup by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DirectoryError>;

    /// Insert a new account, failing with `DuplicateEmail` if the email
    /// is already taken.
    async fn insert(&self, account: NewAccount) -> Result<Account, DirectoryError>;
}

/// Postgres-backed account directory
#[derive(Clone)]
pub struct PgAccountDirectory {
    pool: PgPool,
}

impl PgAccountDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountDirectory for PgAccountDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DirectoryError> {
        let account: Option<Account> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash, role
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, DirectoryError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The unique index on email is the authoritative duplicate check
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                DirectoryError::DuplicateEmail
            } else {
                DirectoryError::from(e)
            }
        })?;

        Ok(Account {
            id,
            email: account.email,
            password_hash: account.password_hash,
            role: account.role,
        })
    }
}
