use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The user row could not be created.
    ///
    /// Covers password policy violations and already registered emails. Results in
    /// 400 Bad Request carrying the reason.
    #[error("Failed to create user: {0}")]
    CredentialCreation(String),

    /// The user row was written but the default role could not be assigned.
    ///
    /// Results in 500 Internal Server Error; the registration transaction is rolled back.
    #[error("Failed to add a role: {0}")]
    RoleAssignment(String),
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        match self {
            Self::CredentialCreation(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::RoleAssignment(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Failed to add a role.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
