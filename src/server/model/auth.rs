use serde::{Deserialize, Serialize};

use crate::model::auth::{LoginDto, RegisterDto};

/// Claims carried by issued bearer tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Id of the authenticated user.
    pub sub: String,
    /// Issued at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Login attempt.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl Credentials {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            remember_me: dto.remember_me,
        }
    }
}

/// Self-registration request.
#[derive(Debug, Clone)]
pub struct RegistrationParams {
    pub name: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub password: String,
}

impl RegistrationParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            phone_number: dto.phone_number,
            email: dto.email,
            password: dto.password,
        }
    }
}
