//! JWT access-token and password-reset-token generation/validation.
//!
//! Access tokens are HS256-signed JWTs carrying the user's identity as a
//! [`Claims`] payload. Reset tokens are signed with a separate secret so a
//! leaked reset token can never open a session, and a session token can
//! never reset a password.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use vportal_db::models::user::User;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the username.
    pub sub: String,
    /// The user's role name (e.g. `"admin"`).
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Claims embedded in a password-reset token.
///
/// `sub` is deserialized as `Option` so a token that was signed without a
/// subject is detected explicitly rather than rejected as a decode error.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetClaims {
    /// Subject -- the account email.
    pub sub: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret for access tokens.
    pub secret: String,
    /// HMAC-SHA256 secret for password-reset tokens. Must differ from
    /// `secret` so the two token kinds stay mutually unforgeable.
    pub reset_secret: String,
    /// Access token lifetime in minutes (default: 60).
    pub access_token_expiry_mins: i64,
    /// Reset token lifetime in minutes (default: 60).
    pub reset_token_expiry_mins: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;
/// Default reset token expiry in minutes.
const DEFAULT_RESET_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_RESET_SECRET`         | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `60`    |
    /// | `JWT_RESET_EXPIRY_MINS`    | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if either secret is unset, empty, or if both are equal.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let reset_secret = std::env::var("JWT_RESET_SECRET")
            .expect("JWT_RESET_SECRET must be set in the environment");
        assert!(!reset_secret.is_empty(), "JWT_RESET_SECRET must not be empty");
        assert!(
            secret != reset_secret,
            "JWT_SECRET and JWT_RESET_SECRET must differ"
        );

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let reset_token_expiry_mins: i64 = std::env::var("JWT_RESET_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_RESET_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_RESET_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            reset_secret,
            access_token_expiry_mins,
            reset_token_expiry_mins,
        }
    }
}

/// Generate an HS256 access token for the given credential record.
///
/// Issue time is captured fresh on every call.
pub fn generate_access_token(
    user: &User,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.access_token_expiry_mins * 60;

    let claims = Claims {
        sub: user.username.clone(),
        role: user.role.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        email: user.email.clone(),
        iat: now,
        exp,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Generate a password-reset token for the given account email.
///
/// Signed with the reset secret, never the access-token secret.
pub fn generate_reset_token(
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = chrono::Utc::now().timestamp() + config.reset_token_expiry_mins * 60;
    let claims = ResetClaims {
        sub: Some(email.to_string()),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.reset_secret.as_bytes()),
    )
}

/// Validate a password-reset token and return the account email it names.
///
/// Fails on a bad signature, an expired token, or a missing subject claim.
pub fn verify_reset_token(
    token: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let token_data = decode::<ResetClaims>(
        token,
        &DecodingKey::from_secret(config.reset_secret.as_bytes()),
        &Validation::default(),
    )?;
    token_data
        .claims
        .sub
        .ok_or_else(|| ErrorKind::MissingRequiredClaim("sub".to_string()).into())
}
