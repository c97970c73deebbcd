use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AccessTokenClaims,
    service::jwt::JwtService,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Guard for endpoints that require an authenticated caller.
///
/// Any valid token is sufficient; roles are stored but never consulted.
pub struct AuthGuard<'a> {
    jwt: &'a JwtService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(jwt: &'a JwtService, headers: &'a HeaderMap) -> Self {
        Self { jwt, headers }
    }

    /// Checks the `Authorization: Bearer <token>` header.
    ///
    /// # Returns
    /// - `Ok(AccessTokenClaims)` - Claims of a valid, unexpired token
    /// - `Err(AuthError::MissingToken)` - Header absent or not a bearer credential
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    pub fn require(&self) -> Result<AccessTokenClaims, AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(token) = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
        else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.jwt.validate_token(token)?;

        Ok(claims)
    }
}
