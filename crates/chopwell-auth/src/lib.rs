//! # chopwell-auth
//!
//! Identity and credential subsystem for the chopwell food-ordering platform.
//! Authenticates users by email or locally formatted phone number, hashes
//! credentials with bcrypt, and issues stateless bearer tokens with embedded
//! claims. Persistence is an external collaborator behind [`IdentityStore`];
//! request-time token verification belongs to the caller's middleware.

pub mod config;
pub mod error;
pub mod hasher;
pub mod identity;
pub mod service;
pub mod store;
pub mod token;

// Error handling
pub use error::AuthError;

// Configuration
pub use config::{AuthConfig, JwtConfig, PasswordConfig};

// Identity model
pub use identity::{Identity, IdentifierKind, PublicIdentity, Role};

// Core seams and implementations
pub use hasher::{BcryptHasher, PasswordHasher};
pub use store::{IdentityStore, MemoryIdentityStore};
pub use token::{Claims, TokenIssuer};

// Flows
pub use service::{AuthService, LoginRequest, LoginResponse, RegisterRequest};

/// Authentication result type alias
pub type AuthResult<T> = Result<T, AuthError>;
