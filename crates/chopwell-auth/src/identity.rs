//! Identity model and account roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform roles. Registration always yields `Customer`; the remaining
/// roles are assigned by out-of-scope staff-management flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Admin,
    Receptionist,
    Chef,
    Rider,
}

impl Role {
    /// The role's wire/storage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
            Role::Receptionist => "receptionist",
            Role::Chef => "chef",
            Role::Rider => "rider",
        }
    }
}

/// Which alternate identifier a lookup targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Email,
    Phone,
}

/// A stored identity. At least one of `email`/`phone_number` is set, and
/// each is unique across all identities when present. The password hash
/// stays inside this crate; everything returned to callers goes through
/// [`PublicIdentity`].
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    /// Canonical local format for the supported country
    pub phone_number: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new customer identity ready for persistence
    pub fn new_customer(
        name: String,
        email: Option<String>,
        phone_number: Option<String>,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone_number,
            password_hash,
            role: Role::default(),
            location: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The sanitized view of this identity, without the password hash
    pub fn to_public(&self) -> PublicIdentity {
        PublicIdentity {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            role: self.role,
            location: self.location.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Identity as exposed to callers - everything except the password hash
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub role: Role,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
