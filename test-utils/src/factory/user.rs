//! User factory for creating test user entities.
//!
//! Users are inserted with a real bcrypt hash of their password so that tests can
//! authenticate them. Hashing uses a low cost to keep tests fast.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// bcrypt cost used for test users.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("Seller")
///     .email("seller@example.com")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
    password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: `"user-{n}"` where n is auto-incremented
    /// - name: `"User {n}"`
    /// - email: `"user{n}@example.com"`
    /// - password: `fixture::user::DEFAULT_PASSWORD`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::user::entity_builder()
            .id(format!("user-{}", id))
            .name(format!("User {}", id))
            .email(format!("user{}@example.com", id))
            .created_date(Utc::now())
            .build();

        Self {
            db,
            entity,
            password: fixture::user::DEFAULT_PASSWORD.to_string(),
        }
    }

    /// Sets the user id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the email and keeps `user_name` and `normalized_email` in step.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.entity.user_name = email.clone();
        self.entity.normalized_email = email.trim().to_lowercase();
        self.entity.email = email;
        self
    }

    /// Sets the plaintext password that will be hashed on insert.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.entity.bio = bio;
        self
    }

    pub fn phone_number(mut self, phone_number: Option<String>) -> Self {
        self.entity.phone_number = phone_number;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::user::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            bio: ActiveValue::Set(self.entity.bio),
            phone_number: ActiveValue::Set(self.entity.phone_number),
            email: ActiveValue::Set(self.entity.email),
            user_name: ActiveValue::Set(self.entity.user_name),
            normalized_email: ActiveValue::Set(self.entity.normalized_email),
            password_hash: ActiveValue::Set(password_hash),
            created_date: ActiveValue::Set(self.entity.created_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the given email and password.
///
/// # Arguments
/// - `db` - Database connection
/// - `email` - Login email
/// - `password` - Plaintext password
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_credentials(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .email(email)
        .password(password)
        .build()
        .await
}
