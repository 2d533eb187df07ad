//! Authentication error types

use chopwell_validation::ValidationErrors;
use thiserror::Error;

/// Errors produced by the identity and credential flows
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials: unknown identifier or wrong password.
    /// One variant and one message for both, so callers cannot probe which
    /// identifiers exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request payload failed validation
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Duplicate identifier at registration
    #[error("{message}")]
    Conflict {
        /// The colliding identifier field (email or phone_number)
        field: String,
        message: String,
    },

    /// Token signing/decoding errors
    #[error("Token error: {message}")]
    TokenError { message: String },

    /// Password hashing errors
    #[error("Cryptographic error: {message}")]
    CryptographicError { message: String },

    /// Identity store errors
    #[error("Storage error: {message}")]
    StorageError { message: String },

    /// Configuration errors
    #[error("Authentication configuration error: {message}")]
    ConfigurationError { message: String },
}

impl AuthError {
    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::Validation(_) => "VALIDATION_FAILED",
            AuthError::Conflict { .. } => "CONFLICT",
            AuthError::TokenError { .. } => "TOKEN_ERROR",
            AuthError::CryptographicError { .. } => "CRYPTOGRAPHIC_ERROR",
            AuthError::StorageError { .. } => "STORAGE_ERROR",
            AuthError::ConfigurationError { .. } => "CONFIGURATION_ERROR",
        }
    }

    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 401,
            AuthError::Validation(_) => 400,
            AuthError::Conflict { .. } => 409,
            AuthError::TokenError { .. } => 500,
            AuthError::CryptographicError { .. } => 500,
            AuthError::StorageError { .. } => 500,
            AuthError::ConfigurationError { .. } => 500,
        }
    }

    /// Whether the error is safe to surface verbatim to a client.
    /// Server-side failures map to a generic message instead.
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// Create a conflict error for a colliding identifier
    pub fn conflict(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a token error
    pub fn token_error(message: impl Into<String>) -> Self {
        Self::TokenError {
            message: message.into(),
        }
    }

    /// Create a cryptographic error
    pub fn crypto_error(message: impl Into<String>) -> Self {
        Self::CryptographicError {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage_error(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::token_error(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::crypto_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.error_code(),
            "INVALID_CREDENTIALS"
        );
        assert_eq!(
            AuthError::conflict("email", "exists").error_code(),
            "CONFLICT"
        );
        assert_eq!(AuthError::token_error("bad").error_code(), "TOKEN_ERROR");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::conflict("email", "exists").status_code(), 409);
        assert_eq!(
            AuthError::Validation(ValidationErrors::new()).status_code(),
            400
        );
        assert_eq!(AuthError::crypto_error("boom").status_code(), 500);
        assert_eq!(AuthError::storage_error("down").status_code(), 500);
    }

    #[test]
    fn test_client_error_split() {
        assert!(AuthError::InvalidCredentials.is_client_error());
        assert!(AuthError::conflict("email", "exists").is_client_error());
        assert!(!AuthError::config_error("missing secret").is_client_error());
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
