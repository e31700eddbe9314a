use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// Every claim is optional so that tokens minted by other tools (which may
/// carry only `userId` and `role`) still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JwtClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry, validated only when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not a Bearer token")]
    InvalidScheme,

    #[error("empty bearer token")]
    EmptyToken,

    #[error("JWT secret is not configured")]
    MissingSecret,

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// HS256 token signer and verifier.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
    validation: Validation,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        Self {
            secret: config.secret.clone(),
            validation,
        }
    }

    /// Verify the signature (and `exp`, if the token has one) and decode the claims.
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, AuthError> {
        if self.secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &self.validation,
        )?;

        Ok(data.claims)
    }

    /// Sign a token for `user_id`. Without a `ttl` the token never expires.
    pub fn issue_token(
        &self,
        user_id: i64,
        role: Option<&str>,
        ttl: Option<Duration>,
    ) -> Result<String, AuthError> {
        if self.secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let now = Utc::now();
        let claims = JwtClaims {
            sub: Some(user_id.to_string()),
            user_id: Some(user_id),
            role: role.map(str::to_string),
            iat: Some(now.timestamp()),
            exp: ttl.map(|ttl| (now + ttl).timestamp()),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }
}
