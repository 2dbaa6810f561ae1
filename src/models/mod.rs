//! Data models for the candidate tracker backend

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub mod candidate;
pub use candidate::*;

/// Account roles
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Admin,
    Candidate,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Admin => "admin",
            AccountRole::Candidate => "candidate",
        }
    }

    /// Parse a role from its wire representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(AccountRole::Admin),
            "candidate" => Some(AccountRole::Candidate),
            _ => None,
        }
    }
}

impl Default for AccountRole {
    fn default() -> Self {
        AccountRole::Candidate
    }
}

/// Account model as stored in the directory
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: AccountRole,
}

/// A new account ready for insertion (password already hashed)
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub role: AccountRole,
}

/// The identity resolved for a single authenticated request
#[derive(Debug, Clone)]
pub struct Principal {
    pub email: String,
    pub role: AccountRole,
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Registration request body
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Option<AccountRole>,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account response (sanitized for API, never carries the hash)
#[derive(Debug, Serialize, Clone)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub role: AccountRole,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            role: account.role,
        }
    }
}

/// User summary returned on login
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub name: String,
    pub email: String,
    pub role: AccountRole,
}

/// Login response: user summary plus the bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: LoginUser,
    pub token: String,
}

impl LoginResponse {
    /// Build the login payload for an account. The display name is the
    /// local part of the email, which is all this API exposes.
    pub fn for_account(account: &Account, token: String) -> Self {
        let name = account
            .email
            .split('@')
            .next()
            .unwrap_or(&account.email)
            .to_string();

        Self {
            user: LoginUser {
                name,
                email: account.email.clone(),
                role: account.role,
            },
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use axum::http::StatusCode;

    #[test]
    fn test_register_request_rejects_invalid_email() {
        let req = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
            role: None,
        };

        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("email"));

        // The handler surfaces this as a 400
        let api_err = ApiError::from(err);
        assert!(matches!(api_err, ApiError::ValidationError(_)));
        assert_eq!(api_err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_register_request_rejects_empty_password() {
        let req = RegisterRequest {
            email: "alice@example.com".to_string(),
            password: String::new(),
            role: None,
        };

        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("password"));
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(AccountRole::parse("admin"), Some(AccountRole::Admin));
        assert_eq!(
            AccountRole::parse("candidate"),
            Some(AccountRole::Candidate)
        );
        assert_eq!(AccountRole::parse("superuser"), None);
        assert_eq!(
            AccountRole::parse(AccountRole::Admin.as_str()),
            Some(AccountRole::Admin)
        );
    }

    #[test]
    fn test_default_role_is_candidate() {
        assert_eq!(AccountRole::default(), AccountRole::Candidate);
    }

    #[test]
    fn test_account_response_hides_hash() {
        let account = Account {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$12$abcdefg".to_string(),
            role: AccountRole::Candidate,
        };

        let response: AccountResponse = account.into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("$2b$12$"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_login_user_name_is_email_local_part() {
        let account = Account {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            role: AccountRole::Admin,
        };

        let response = LoginResponse::for_account(&account, "tok".to_string());
        assert_eq!(response.user.name, "alice");
        assert_eq!(response.user.email, "alice@example.com");
    }
}
