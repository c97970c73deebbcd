//! Password hashing and the registration password policy.

use crate::server::error::{registration::RegistrationError, AppError};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, cost)?)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    Ok(bcrypt::verify(password, hash)?)
}

/// Checks a new password against the policy.
///
/// Requires at least 8 characters with a digit, a lowercase letter, an uppercase letter
/// and a non-alphanumeric character.
pub fn validate_password_strength(password: &str) -> Result<(), RegistrationError> {
    let reject = |reason: &str| Err(RegistrationError::CredentialCreation(reason.to_string()));

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return reject("Password must be at least 8 characters");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return reject("Password must contain at least one digit");
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return reject("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return reject("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return reject("Password must contain at least one special character");
    }

    Ok(())
}
