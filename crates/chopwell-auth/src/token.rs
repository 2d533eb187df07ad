//! Bearer token issuance

use crate::config::JwtConfig;
use crate::identity::{Identity, Role};
use crate::AuthResult;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in an access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the identity id
    pub sub: Uuid,
    pub email: Option<String>,
    pub role: Role,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

/// Signs claim sets into stateless bearer tokens.
///
/// HS256 with a fixed expiry, no refresh. The token is the complete
/// authorization artifact; request-time verification is the consuming
/// middleware's job, [`decode`](TokenIssuer::decode) exists for that
/// collaborator and for tests.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expiry_secs: u64,
}

impl TokenIssuer {
    /// Create a token issuer from JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            expiry_secs: config.expiry_secs,
        }
    }

    /// Sign an access token for an identity
    pub fn issue(&self, identity: &Identity) -> AuthResult<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::seconds(self.expiry_secs as i64);

        let claims = Claims {
            sub: identity.id,
            email: identity.email.clone(),
            role: identity.role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Decode and check a token, returning its claims
    pub fn decode(&self, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}
