//! Credential management for TencentCloud authentication

use crate::error::{Result, TencentCloudError};
use chrono::{DateTime, Duration, Utc};
use std::env;

/// TencentCloud credentials for API authentication.
///
/// A credential is a value type: it is never mutated in place, only
/// replaced. `Static` credentials never expire; `Expiring` credentials
/// (temporary STS-style credentials) additionally carry an `expiration`
/// instant and can report how close they are to going stale.
#[derive(Debug, Clone, PartialEq)]
pub enum Credential {
    /// A credential with no expiration (long-lived API keys).
    Static {
        /// Secret ID for authentication
        secret_id: String,
        /// Secret Key for authentication
        secret_key: String,
        /// Session token, if this static credential carries one
        token: Option<String>,
    },
    /// A credential that becomes invalid after `expiration`.
    Expiring {
        /// Secret ID for authentication
        secret_id: String,
        /// Secret Key for authentication
        secret_key: String,
        /// Session token for temporary credentials
        token: Option<String>,
        /// Instant after which the credential is no longer valid
        expiration: DateTime<Utc>,
    },
}

impl Credential {
    /// Create a new non-expiring Credential instance
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tencentcloud_sdk_core::Credential;
    ///
    /// let credential = Credential::new("your_secret_id", "your_secret_key", None);
    /// ```
    pub fn new<S: Into<String>>(secret_id: S, secret_key: S, token: Option<S>) -> Self {
        Self::Static {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            token: token.map(|t| t.into()),
        }
    }

    /// Create a temporary credential that expires at `expiration`.
    pub fn expiring<S: Into<String>>(
        secret_id: S,
        secret_key: S,
        token: Option<S>,
        expiration: DateTime<Utc>,
    ) -> Self {
        Self::Expiring {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            token: token.map(|t| t.into()),
            expiration,
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads the following environment variables:
    /// - `TENCENTCLOUD_SECRET_ID` or `TC_SECRET_ID`
    /// - `TENCENTCLOUD_SECRET_KEY` or `TC_SECRET_KEY`
    /// - `TENCENTCLOUD_TOKEN` or `TC_TOKEN` (optional)
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use tencentcloud_sdk_core::Credential;
    ///
    /// let credential = Credential::from_env().unwrap();
    /// ```
    pub fn from_env() -> Result<Self> {
        let secret_id = env::var("TENCENTCLOUD_SECRET_ID")
            .or_else(|_| env::var("TC_SECRET_ID"))
            .map_err(|_| {
                TencentCloudError::auth(
                    "TENCENTCLOUD_SECRET_ID or TC_SECRET_ID environment variable not found",
                )
            })?;

        let secret_key = env::var("TENCENTCLOUD_SECRET_KEY")
            .or_else(|_| env::var("TC_SECRET_KEY"))
            .map_err(|_| {
                TencentCloudError::auth(
                    "TENCENTCLOUD_SECRET_KEY or TC_SECRET_KEY environment variable not found",
                )
            })?;

        let token = env::var("TENCENTCLOUD_TOKEN")
            .or_else(|_| env::var("TC_TOKEN"))
            .ok();

        Ok(Self::Static {
            secret_id,
            secret_key,
            token,
        })
    }

    /// Validate that the credential has required fields
    pub fn validate(&self) -> Result<()> {
        if self.secret_id().is_empty() {
            return Err(TencentCloudError::auth("Secret ID cannot be empty"));
        }
        if self.secret_key().is_empty() {
            return Err(TencentCloudError::auth("Secret Key cannot be empty"));
        }
        Ok(())
    }

    /// Get the secret ID
    pub fn secret_id(&self) -> &str {
        match self {
            Self::Static { secret_id, .. } => secret_id,
            Self::Expiring { secret_id, .. } => secret_id,
        }
    }

    /// Get the secret key
    pub fn secret_key(&self) -> &str {
        match self {
            Self::Static { secret_key, .. } => secret_key,
            Self::Expiring { secret_key, .. } => secret_key,
        }
    }

    /// Get the session token
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Static { token, .. } => token.as_deref(),
            Self::Expiring { token, .. } => token.as_deref(),
        }
    }

    /// Check if this credential has a session token
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Returns the expiration instant, if this is an `Expiring` credential.
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Static { .. } => None,
            Self::Expiring { expiration, .. } => Some(*expiration),
        }
    }

    /// `true` if this credential is `Expiring` and will expire within `within`
    /// of now. Non-expiring credentials are never expiring.
    pub fn is_expiring(&self, within: Duration) -> bool {
        match self.expiration() {
            Some(expiration) => Utc::now() + within >= expiration,
            None => false,
        }
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::Static {
            secret_id: String::new(),
            secret_key: String::new(),
            token: None,
        }
    }
}
