//! 卖家凭据认证
//!
//! Protected requests carry `username` / `password` in their body. The
//! [`SellerAuthenticator`] checks them against the stored hash and hands out
//! an [`AuthenticatedSeller`], which protected handlers require.

use crate::auth::password;
use crate::db::repository::SellerRepository;
use crate::security_log;
use crate::utils::validation::{Fields, optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Credentials as read from a request body
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Pull `username` / `password` from a payload; non-string values count as missing
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            username: optional_text(fields, "username").ok().flatten(),
            password: optional_text(fields, "password").ok().flatten(),
        }
    }
}

/// Proof that the request was made by the seller.
///
/// Only [`SellerAuthenticator::authenticate`] can construct one.
#[derive(Debug, Clone)]
pub struct AuthenticatedSeller {
    username: String,
}

impl AuthenticatedSeller {
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Checks seller credentials against the `sellers` table
#[derive(Clone)]
pub struct SellerAuthenticator {
    sellers: SellerRepository,
}

impl SellerAuthenticator {
    pub fn new(sellers: SellerRepository) -> Self {
        Self { sellers }
    }

    /// Every failure reports the same `Invalid credentials` error
    pub async fn authenticate(&self, credentials: &Credentials) -> AppResult<AuthenticatedSeller> {
        let (Some(username), Some(password)) = (&credentials.username, &credentials.password)
        else {
            security_log!(WARN, "auth_missing", reason = "missing_credentials");
            return Err(AppError::invalid_credentials());
        };

        let seller = self.sellers.find_by_username(username).await.map_err(|e| {
            tracing::error!(username = %username, error = %e, "Failed to load seller");
            AppError::new(ErrorCode::DatabaseError)
        })?;

        let Some(seller) = seller else {
            security_log!(WARN, "auth_failed", username = %username, reason = "unknown_user");
            return Err(AppError::invalid_credentials());
        };

        if !password::verify_password(password.clone(), seller.password).await? {
            security_log!(WARN, "auth_failed", username = %username, reason = "invalid_password");
            return Err(AppError::invalid_credentials());
        }

        tracing::debug!(username = %username, "Seller authenticated");
        Ok(AuthenticatedSeller {
            username: seller.username,
        })
    }
}
