//! Postgres-backed directory and bootstrap tests
//!
//! These exercise the real account directory against a live database and
//! are ignored by default; point TEST_DATABASE_URL at a migrated database
//! to run them.

use std::sync::Arc;

use chrono::Duration;
use sqlx::PgPool;
use uuid::Uuid;

use candidate_tracker_server::auth::{AuthError, AuthService, TokenService};
use candidate_tracker_server::directory::{AccountDirectory, DirectoryError, PgAccountDirectory};
use candidate_tracker_server::models::{AccountRole, NewAccount};

/// Helper to create a test database pool
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| "postgresql://localhost/candidate_tracker_test".to_string());

    sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}

/// Unique email per test run so reruns do not collide
fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4())
}

fn auth_service(pool: PgPool) -> AuthService {
    AuthService::new(
        Arc::new(PgAccountDirectory::new(pool)),
        TokenService::new("integration-test-secret"),
        Duration::minutes(30),
    )
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_insert_and_find_by_email() {
    let pool = setup_test_db().await;
    let directory = PgAccountDirectory::new(pool);

    let email = unique_email("find");
    let inserted = directory
        .insert(NewAccount {
            email: email.clone(),
            password_hash: "$2b$12$placeholderplaceholderplace".to_string(),
            role: AccountRole::Candidate,
        })
        .await
        .unwrap();

    let found = directory.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.id, inserted.id);
    assert_eq!(found.role, AccountRole::Candidate);

    // Lookup is case-sensitive exact match
    let upper = directory
        .find_by_email(&email.to_uppercase())
        .await
        .unwrap();
    assert!(upper.is_none());
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_duplicate_insert_is_rejected_by_unique_index() {
    let pool = setup_test_db().await;
    let directory = PgAccountDirectory::new(pool);

    let email = unique_email("dup");
    let account = NewAccount {
        email,
        password_hash: "$2b$12$placeholderplaceholderplace".to_string(),
        role: AccountRole::Candidate,
    };

    directory.insert(account.clone()).await.unwrap();
    let second = directory.insert(account).await;

    assert!(matches!(second, Err(DirectoryError::DuplicateEmail)));
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_register_login_authenticate_flow() {
    let pool = setup_test_db().await;
    let auth = auth_service(pool);

    let email = unique_email("flow");
    auth.register(&email, "hunter2", AccountRole::Candidate)
        .await
        .unwrap();

    let (_, token) = auth.login(&email, "hunter2").await.unwrap();
    let principal = auth.authenticate(&token).await.unwrap();
    assert_eq!(principal.email, email);
    assert_eq!(principal.role, AccountRole::Candidate);

    assert!(matches!(
        auth.login(&email, "wrong").await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_admin_seeding_is_idempotent() {
    let pool = setup_test_db().await;
    let auth = auth_service(pool.clone());

    let email = unique_email("admin");
    assert!(auth.seed_default_admin(&email, "bootstrap-pw").await.unwrap());
    assert!(!auth.seed_default_admin(&email, "bootstrap-pw").await.unwrap());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
