//! User fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating user entity models without database insertion.
//! The stored `password_hash` is a placeholder; use the user factory when a test needs a
//! password that verifies.

use chrono::{DateTime, Utc};
use entity::user;

/// Default test user id.
pub const DEFAULT_ID: &str = "00000000-0000-4000-8000-000000000001";

/// Default test user display name.
pub const DEFAULT_NAME: &str = "Test User";

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "test.user@example.com";

/// Password satisfying the registration policy.
pub const DEFAULT_PASSWORD: &str = "Secret#123";

/// Placeholder hash stored by in-memory fixtures.
pub const DEFAULT_PASSWORD_HASH: &str = "not-a-real-hash";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `DEFAULT_ID`
/// - name: `"Test User"`
/// - email / user_name: `"test.user@example.com"`
/// - normalized_email: `"test.user@example.com"`
/// - bio / phone_number: `None`
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let user = fixture::user::entity_builder()
///     .name("Seller")
///     .email("seller@example.com")
///     .build();
/// ```
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: String,
    name: String,
    bio: Option<String>,
    phone_number: Option<String>,
    email: String,
    password_hash: String,
    created_date: DateTime<Utc>,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            name: DEFAULT_NAME.to_string(),
            bio: None,
            phone_number: None,
            email: DEFAULT_EMAIL.to_string(),
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
            created_date: Utc::now(),
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.bio = bio;
        self
    }

    pub fn phone_number(mut self, phone_number: Option<String>) -> Self {
        self.phone_number = phone_number;
        self
    }

    /// Sets the email, which also drives `user_name` and `normalized_email`.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            name: self.name,
            bio: self.bio,
            phone_number: self.phone_number,
            user_name: self.email.clone(),
            normalized_email: self.email.trim().to_lowercase(),
            email: self.email,
            password_hash: self.password_hash,
            created_date: self.created_date,
        }
    }
}
