use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Public view of a user. Never carries the password hash or roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
    pub email: String,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
    #[validate(email(message = "Email must be a valid email address"))]
    #[validate(length(max = 50, message = "Email must be at most 50 characters"))]
    pub email: String,
}
