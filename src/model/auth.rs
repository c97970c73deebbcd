use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Registration payload. The password policy is enforced by the auth service so
/// that failures surface as registration errors rather than field validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,
    pub phone_number: Option<String>,
    #[validate(email(message = "Email must be a valid email address"))]
    #[validate(length(max = 50, message = "Email must be at most 50 characters"))]
    pub email: String,
    pub password: String,
}

/// Bearer token issued on a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
}
