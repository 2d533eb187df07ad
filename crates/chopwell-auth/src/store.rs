//! Identity store collaborator contract and in-memory implementation

use crate::identity::{Identity, IdentifierKind};
use crate::{AuthError, AuthResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Persistence contract for identities.
///
/// The store is the system of record for identifier uniqueness: `create`
/// must reject a duplicate email or phone number atomically, because the
/// flow-level existence checks in
/// [`AuthService`](crate::service::AuthService) are check-then-act and can
/// race under concurrent registration.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Look up an identity by one of its alternate identifiers
    async fn find_by_identifier(
        &self,
        kind: IdentifierKind,
        value: &str,
    ) -> AuthResult<Option<Identity>>;

    /// Persist a new identity. Fails with [`AuthError::Conflict`] if the
    /// email or phone number is already taken.
    async fn create(&self, identity: Identity) -> AuthResult<Identity>;
}

/// In-memory identity store.
///
/// Both nullable-unique constraints are checked and the insert performed
/// under a single lock, which makes `create` atomic with respect to
/// concurrent registration.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    identities: Mutex<HashMap<Uuid, Identity>>,
}

impl MemoryIdentityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities
    pub async fn len(&self) -> usize {
        self.identities.lock().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.identities.lock().await.is_empty()
    }
}

fn matches_identifier(identity: &Identity, kind: IdentifierKind, value: &str) -> bool {
    let field = match kind {
        IdentifierKind::Email => &identity.email,
        IdentifierKind::Phone => &identity.phone_number,
    };
    field.as_deref() == Some(value)
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn find_by_identifier(
        &self,
        kind: IdentifierKind,
        value: &str,
    ) -> AuthResult<Option<Identity>> {
        let identities = self.identities.lock().await;
        Ok(identities
            .values()
            .find(|identity| matches_identifier(identity, kind, value))
            .cloned())
    }

    async fn create(&self, identity: Identity) -> AuthResult<Identity> {
        let mut identities = self.identities.lock().await;

        if let Some(email) = identity.email.as_deref() {
            if identities
                .values()
                .any(|existing| matches_identifier(existing, IdentifierKind::Email, email))
            {
                return Err(AuthError::conflict(
                    "email",
                    "User with this email already exists",
                ));
            }
        }
        if let Some(phone) = identity.phone_number.as_deref() {
            if identities
                .values()
                .any(|existing| matches_identifier(existing, IdentifierKind::Phone, phone))
            {
                return Err(AuthError::conflict(
                    "phone_number",
                    "User with this phone number already exists",
                ));
            }
        }

        identities.insert(identity.id, identity.clone());
        Ok(identity)
    }
}
