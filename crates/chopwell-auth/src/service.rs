//! Registration and authentication flows

use crate::config::AuthConfig;
use crate::hasher::PasswordHasher;
use crate::identity::{Identity, IdentifierKind, PublicIdentity};
use crate::store::IdentityStore;
use crate::token::TokenIssuer;
use crate::{AuthError, AuthResult};
use async_trait::async_trait;
use chopwell_validation::phone::normalize_to_local;
use chopwell_validation::validators::{
    EmailValidator, LengthValidator, PhoneForCountryValidator, RequiredValidator,
};
use chopwell_validation::{Rules, ValidateRecord, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Registration payload. The caller cannot choose a role; every
/// registration yields a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Dialing code for the phone number, e.g. "233"
    pub country_code: Option<String>,
    pub password: String,
}

/// Login payload: one identifier plus the password. If both identifiers
/// are given, email takes precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: String,
}

/// Successful login: the bearer token and the sanitized identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: PublicIdentity,
}

/// Cross-field rule: at least one of email/phone_number must be present.
struct RequireIdentifierRule;

#[async_trait]
impl ValidateRecord for RequireIdentifierRule {
    async fn validate_record(&self, record: &HashMap<String, Value>) -> ValidationResult<()> {
        let has = |field: &str| {
            record
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.trim().is_empty())
        };
        if has("email") || has("phone_number") {
            Ok(())
        } else {
            Err(ValidationError::with_code(
                "identifier",
                "Either email or phone_number must be provided",
                "identifier_required",
            )
            .into())
        }
    }

    fn rule_name(&self) -> &'static str {
        "identifier_required"
    }
}

fn to_record<T: Serialize>(request: &T) -> HashMap<String, Value> {
    match serde_json::to_value(request) {
        Ok(Value::Object(map)) => map.into_iter().collect(),
        _ => HashMap::new(),
    }
}

/// Identity and credential flows over an [`IdentityStore`] collaborator.
///
/// The store enforces identifier uniqueness as the system of record; the
/// existence checks here only produce friendly errors ahead of the
/// constraint.
pub struct AuthService<S: IdentityStore> {
    store: S,
    hasher: Box<dyn PasswordHasher>,
    issuer: TokenIssuer,
    register_rules: Rules,
    login_rules: Rules,
}

impl<S: IdentityStore> AuthService<S> {
    /// Create the service from its collaborators and configuration
    pub fn new(store: S, hasher: Box<dyn PasswordHasher>, config: &AuthConfig) -> Self {
        let register_rules = Rules::new()
            .field("name", RequiredValidator::new())
            .field("password", RequiredValidator::new())
            .field(
                "password",
                LengthValidator::new().min(config.password.min_length),
            )
            .field("email", EmailValidator::new())
            .record(RequireIdentifierRule)
            .record(PhoneForCountryValidator::new("phone_number", "country_code"));

        let login_rules = Rules::new()
            .field("password", RequiredValidator::new())
            .record(RequireIdentifierRule);

        Self {
            store,
            hasher,
            issuer: TokenIssuer::new(&config.jwt),
            register_rules,
            login_rules,
        }
    }

    /// Register a new customer identity.
    ///
    /// The phone number is normalized to the canonical local form at this
    /// boundary, then the whole payload is validated. Exactly one
    /// persistence write; no token is issued.
    pub async fn register(&self, mut request: RegisterRequest) -> AuthResult<PublicIdentity> {
        let normalized = request
            .phone_number
            .as_deref()
            .and_then(|phone| normalize_to_local(phone, request.country_code.as_deref()));
        request.phone_number = normalized;

        self.register_rules.validate(&to_record(&request)).await?;

        // Friendly pre-checks; the store constraint is the source of truth
        if let Some(email) = request.email.as_deref() {
            if self
                .store
                .find_by_identifier(IdentifierKind::Email, email)
                .await?
                .is_some()
            {
                return Err(AuthError::conflict(
                    "email",
                    "User with this email already exists",
                ));
            }
        }
        if let Some(phone) = request.phone_number.as_deref() {
            if self
                .store
                .find_by_identifier(IdentifierKind::Phone, phone)
                .await?
                .is_some()
            {
                return Err(AuthError::conflict(
                    "phone_number",
                    "User with this phone number already exists",
                ));
            }
        }

        let password_hash = self.hasher.hash_password(&request.password)?;
        let identity = Identity::new_customer(
            request.name,
            request.email,
            request.phone_number,
            password_hash,
        );

        debug!(identity_id = %identity.id, "persisting new identity");
        let saved = self.store.create(identity).await?;
        info!(identity_id = %saved.id, role = saved.role.as_str(), "identity registered");

        Ok(saved.to_public())
    }

    /// Authenticate by email or phone number and issue an access token.
    ///
    /// Unknown identifier and wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, request: LoginRequest) -> AuthResult<LoginResponse> {
        self.login_rules.validate(&to_record(&request)).await?;

        // Email takes precedence; exactly one lookup. Phone spellings are
        // reduced to digits so formatted input matches the stored canonical
        // form.
        let (kind, value) = if let Some(email) = request.email.as_deref() {
            (IdentifierKind::Email, email.to_string())
        } else {
            let phone = request.phone_number.as_deref().unwrap_or_default();
            (
                IdentifierKind::Phone,
                normalize_to_local(phone, None).unwrap_or_default(),
            )
        };

        let identity = match self.store.find_by_identifier(kind, &value).await? {
            Some(identity) => identity,
            None => {
                warn!("login failed: unknown identifier");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self
            .hasher
            .verify_password(&request.password, &identity.password_hash)?
        {
            warn!(identity_id = %identity.id, "login failed: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.issuer.issue(&identity)?;
        info!(identity_id = %identity.id, "login succeeded");

        Ok(LoginResponse {
            access_token,
            user: identity.to_public(),
        })
    }

    /// The token issuer, for collaborators that verify incoming tokens
    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.issuer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::hasher::BcryptHasher;
    use crate::identity::Role;
    use crate::store::MemoryIdentityStore;

    fn service() -> AuthService<MemoryIdentityStore> {
        let config = AuthConfig {
            jwt: JwtConfig::with_secret("test-secret"),
            password: Default::default(),
        };
        AuthService::new(
            MemoryIdentityStore::new(),
            Box::new(BcryptHasher::development()),
            &config,
        )
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Ama Mensah".to_string(),
            email: Some("ama@example.com".to_string()),
            phone_number: None,
            country_code: None,
            password: "supersecret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_returns_sanitized_customer() {
        let service = service();
        let user = service.register(register_request()).await.unwrap();

        assert_eq!(user.role, Role::Customer);
        assert_eq!(user.email.as_deref(), Some("ama@example.com"));
        assert!(serde_json::to_value(&user)
            .unwrap()
            .get("password_hash")
            .is_none());
    }

    #[tokio::test]
    async fn test_register_without_identifier_is_invalid_input() {
        let service = service();
        let request = RegisterRequest {
            email: None,
            ..register_request()
        };

        let err = service.register(request).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        match err {
            AuthError::Validation(errors) => assert!(errors.has_field_errors("identifier")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_short_password_is_invalid_input() {
        let service = service();
        let request = RegisterRequest {
            password: "short".to_string(),
            ..register_request()
        };

        let err = service.register(request).await.unwrap_err();
        match err {
            AuthError::Validation(errors) => assert!(errors.has_field_errors("password")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_normalizes_phone_at_boundary() {
        let service = service();
        let request = RegisterRequest {
            email: None,
            phone_number: Some("+233591552809".to_string()),
            country_code: Some("233".to_string()),
            ..register_request()
        };

        let user = service.register(request).await.unwrap();
        assert_eq!(user.phone_number.as_deref(), Some("0591552809"));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_ghana_prefix() {
        let service = service();
        let request = RegisterRequest {
            email: None,
            phone_number: Some("0991234567".to_string()),
            country_code: Some("233".to_string()),
            ..register_request()
        };

        let err = service.register(request).await.unwrap_err();
        match err {
            AuthError::Validation(errors) => assert!(errors.has_field_errors("phone_number")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_regardless_of_phone() {
        let service = service();
        service.register(register_request()).await.unwrap();

        let request = RegisterRequest {
            phone_number: Some("0591552809".to_string()),
            country_code: Some("233".to_string()),
            ..register_request()
        };
        let err = service.register(request).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict { ref field, .. } if field == "email"));
    }

    #[tokio::test]
    async fn test_login_wrong_password_matches_unknown_identifier() {
        let service = service();
        service.register(register_request()).await.unwrap();

        let wrong_password = service
            .login(LoginRequest {
                email: Some("ama@example.com".to_string()),
                phone_number: None,
                password: "wrongpassword".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_email = service
            .login(LoginRequest {
                email: Some("nobody@example.com".to_string()),
                phone_number: None,
                password: "supersecret".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_email_takes_precedence() {
        let service = service();
        service.register(register_request()).await.unwrap();

        // A phone that matches nothing must not matter when email is given
        let response = service
            .login(LoginRequest {
                email: Some("ama@example.com".to_string()),
                phone_number: Some("0599999999".to_string()),
                password: "supersecret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.user.email.as_deref(), Some("ama@example.com"));
    }

    #[tokio::test]
    async fn test_login_without_identifier_is_invalid_input() {
        let service = service();
        let err = service
            .login(LoginRequest {
                email: None,
                phone_number: None,
                password: "supersecret".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_login_by_formatted_phone_spelling() {
        let service = service();
        let request = RegisterRequest {
            email: None,
            phone_number: Some("591552809".to_string()),
            country_code: Some("233".to_string()),
            ..register_request()
        };
        service.register(request).await.unwrap();

        let response = service
            .login(LoginRequest {
                email: None,
                phone_number: Some("059 155 2809".to_string()),
                password: "supersecret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.user.phone_number.as_deref(), Some("0591552809"));
    }
}
