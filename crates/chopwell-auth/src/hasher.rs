//! Password hashing

use crate::AuthResult;

/// Password hasher seam. One-way, salted; failures are internal errors,
/// never validation errors.
pub trait PasswordHasher: Send + Sync {
    /// Hash a password
    fn hash_password(&self, password: &str) -> AuthResult<String>;

    /// Verify a password against its hash
    fn verify_password(&self, password: &str, hash: &str) -> AuthResult<bool>;

    /// Get the hasher name
    fn hasher_name(&self) -> &str;
}

/// bcrypt password hasher
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a new bcrypt hasher with custom cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Cost used in production
    pub fn production() -> Self {
        Self { cost: 10 }
    }

    /// Low-cost hasher for tests
    pub fn development() -> Self {
        Self { cost: 4 }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::production()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> AuthResult<String> {
        bcrypt::hash(password, self.cost).map_err(Into::into)
    }

    fn verify_password(&self, password: &str, hash: &str) -> AuthResult<bool> {
        bcrypt::verify(password, hash).map_err(Into::into)
    }

    fn hasher_name(&self) -> &str {
        "bcrypt"
    }
}
