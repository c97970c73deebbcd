//! Bearer token issuance and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AccessTokenClaims,
};

/// HS256 token service holding the server's signing secret.
#[derive(Clone)]
pub struct JwtService {
    /// Symmetric signing secret
    secret: String,
    /// Lifetime of a regular token (default: 1 day)
    expires_in: Duration,
    /// Lifetime of a token issued with "remember me" (default: 30 days)
    remember_me_expires_in: Duration,
}

impl JwtService {
    /// Create a new JWT service with the default token lifetimes
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_in: Duration::days(1),
            remember_me_expires_in: Duration::days(30),
        }
    }

    /// Issue a signed token for `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Stored in the `sub` claim
    /// - `remember_me` - Selects the 30 day instead of the 1 day lifetime
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::TokenErr)` - Encoding failed
    pub fn generate_token(&self, user_id: &str, remember_me: bool) -> Result<String, AppError> {
        let now = Utc::now();
        let lifetime = if remember_me {
            self.remember_me_expires_in
        } else {
            self.expires_in
        };

        let claims = AccessTokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        Ok(encode(&header, &claims, &encoding_key)?)
    }

    /// Decode a token, checking its signature and expiry.
    pub fn validate_token(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());

        decode::<AccessTokenClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
