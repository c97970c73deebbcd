//! User data repository for identity lookups and registration.
//!
//! Generic reads, updates and deletes of users go through `EntityRepository`. This
//! repository covers what only the auth service needs and is generic over the connection
//! so registration can run inside a transaction.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::util::email::normalize_email;

/// Values for inserting a newly registered user.
pub struct CreateUserParams {
    pub id: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub created_date: DateTime<Utc>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by email, ignoring case and surrounding whitespace.
    ///
    /// # Arguments
    /// - `email` - Email as entered by the user
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - A user is registered with that email
    /// - `Ok(None)` - No such user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::NormalizedEmail.eq(normalize_email(email)))
            .one(self.db)
            .await
    }

    /// Inserts a new user with `user_name` set to the email.
    ///
    /// # Arguments
    /// - `params` - Values for the new row, including the already hashed password
    ///
    /// # Returns
    /// - `Ok(Model)` - Inserted user
    /// - `Err(DbErr)` - Database error, including unique violation on the email
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(params.id),
            name: ActiveValue::Set(params.name),
            bio: ActiveValue::Set(None),
            phone_number: ActiveValue::Set(params.phone_number),
            user_name: ActiveValue::Set(params.email.clone()),
            normalized_email: ActiveValue::Set(normalize_email(&params.email)),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            created_date: ActiveValue::Set(params.created_date),
        }
        .insert(self.db)
        .await
    }
}
