//! Authentication configuration types

use crate::{AuthError, AuthResult};
use serde::{Deserialize, Serialize};

/// Main authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password policy configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Build the configuration from the environment.
    ///
    /// `JWT_SECRET` is required; there is deliberately no hardcoded fallback
    /// for a deployment that forgot to set it.
    pub fn from_env() -> AuthResult<Self> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| AuthError::config_error("JWT_SECRET must be set"))?;

        let config = Self {
            jwt: JwtConfig::with_secret(secret),
            password: PasswordConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants
    pub fn validate(&self) -> AuthResult<()> {
        if self.jwt.secret.trim().is_empty() {
            return Err(AuthError::config_error("JWT secret must not be empty"));
        }
        if self.jwt.expiry_secs == 0 {
            return Err(AuthError::config_error("JWT expiry must be positive"));
        }
        if self.password.min_length == 0 {
            return Err(AuthError::config_error(
                "minimum password length must be positive",
            ));
        }
        Ok(())
    }
}

/// JWT token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for HS256 signing
    pub secret: String,

    /// Token issuer
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Access token expiration time in seconds
    #[serde(default = "default_expiry_secs")]
    pub expiry_secs: u64,
}

impl JwtConfig {
    /// Create a JWT configuration with the given secret and defaults otherwise
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: default_issuer(),
            expiry_secs: default_expiry_secs(),
        }
    }
}

/// Password policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Minimum password length
    #[serde(default = "default_min_password_length")]
    pub min_length: usize,

    /// Bcrypt cost factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_password_length(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_issuer() -> String {
    "chopwell".to_string()
}

// 2 hours, no refresh
fn default_expiry_secs() -> u64 {
    2 * 60 * 60
}

fn default_min_password_length() -> usize {
    6
}

fn default_bcrypt_cost() -> u32 {
    10
}
