use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login email is unknown or the password does not match.
    ///
    /// Both cases share this variant so the response never reveals which one failed.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Request to a protected route carried no bearer token.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token is malformed, wrongly signed or expired.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to 401 Unauthorized:
/// - `InvalidCredentials` → "Invalid username or password"
/// - `MissingToken` / `InvalidToken` → "Authentication required"
///
/// Token failures are logged at debug level for diagnostics while the client-facing
/// message stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid username or password",
            Self::MissingToken | Self::InvalidToken(_) => "Authentication required",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
