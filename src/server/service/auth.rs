//! Credential verification, token issuance and self-registration.
//!
//! Identity does not go through the generic resource service: users have no generic
//! create path, and registration hashes the password and assigns the default role.

use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::user::UserDto,
    server::{
        data::{
            role::RoleRepository,
            user::{CreateUserParams, UserRepository},
        },
        error::{auth::AuthError, registration::RegistrationError, AppError},
        model::{
            auth::{Credentials, RegistrationParams},
            user::UserResource,
        },
        service::{
            jwt::JwtService,
            password::{hash_password, validate_password_strength, verify_password},
        },
    },
};

/// Role every self-registered user receives.
pub const DEFAULT_ROLE: &str = "User";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    password_cost: u32,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, password_cost: u32) -> Self {
        Self {
            db,
            jwt,
            password_cost,
        }
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// An unknown email and a wrong password fail identically.
    ///
    /// # Arguments
    /// - `credentials` - Email, password and whether to issue a long-lived token
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token, valid 1 day or 30 days with `remember_me`
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn authenticate(&self, credentials: Credentials) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&credentials.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!("Issuing token for user {}", user.id);

        self.jwt.generate_token(&user.id, credentials.remember_me)
    }

    /// Registers a new user and assigns the default role.
    ///
    /// The password policy is checked before anything is written. The user insert and
    /// the role assignment share one transaction, so a failed assignment leaves no user.
    ///
    /// # Arguments
    /// - `params` - Name, optional phone number, email and plaintext password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The registered user
    /// - `Err(RegistrationError::CredentialCreation)` - Weak password or email taken
    /// - `Err(RegistrationError::RoleAssignment)` - Default role missing or not assignable
    pub async fn register(&self, params: RegistrationParams) -> Result<UserDto, AppError> {
        validate_password_strength(&params.password)?;

        let password_hash = hash_password(&params.password, self.password_cost)?;

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);
        let role_repo = RoleRepository::new(&txn);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(RegistrationError::CredentialCreation(format!(
                "Email '{}' is already registered",
                params.email
            ))
            .into());
        }

        let user = user_repo
            .create(CreateUserParams {
                id: Uuid::new_v4().to_string(),
                name: params.name,
                phone_number: params.phone_number,
                email: params.email,
                password_hash,
                created_date: Utc::now(),
            })
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::from(
                    RegistrationError::CredentialCreation("Email is already registered".to_string()),
                ),
                _ => AppError::from(e),
            })?;

        let Some(role) = role_repo.find_by_name(DEFAULT_ROLE).await? else {
            return Err(RegistrationError::RoleAssignment(format!(
                "Role '{}' does not exist",
                DEFAULT_ROLE
            ))
            .into());
        };

        role_repo
            .assign(&user.id, &role.id)
            .await
            .map_err(|e| RegistrationError::RoleAssignment(e.to_string()))?;

        txn.commit().await?;

        tracing::info!("Registered user {}", user.id);

        Ok(UserResource::into_dto(user))
    }
}
