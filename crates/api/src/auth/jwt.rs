//! JWT token configuration and validation.
//!
//! User accounts live outside this service; callers present an HS256
//! bearer token whose claims identify them by subject and email.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT settings loaded from the environment.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 signing secret (`JWT_SECRET`).
    pub secret: String,
    /// Token lifetime in hours for locally issued tokens
    /// (`JWT_EXPIRY_HOURS`, default 24).
    pub expiry_hours: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
        let expiry_hours: i64 = std::env::var("JWT_EXPIRY_HOURS")
            .unwrap_or_else(|_| "24".into())
            .parse()
            .expect("JWT_EXPIRY_HOURS must be a valid i64");
        Self {
            secret,
            expiry_hours,
        }
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Stable caller identity from the identity provider.
    pub sub: String,
    /// Caller email, recorded in send logs and `created_by` fields.
    pub email: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issue a token for the given identity. Used by operational tooling and
/// tests; production tokens come from the identity provider with the same
/// shared secret.
pub fn generate_token(
    config: &JwtConfig,
    sub: &str,
    email: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = chrono::Utc::now() + chrono::Duration::hours(config.expiry_hours);
    let claims = Claims {
        sub: sub.to_string(),
        email: email.to_string(),
        exp: exp.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a token and return its claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
