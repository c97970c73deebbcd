//! Condition factory for creating test condition entities.
//!
//! This module provides factory methods for creating condition entities with
//! sensible defaults. Names are made unique per call since the column is unique.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test condition rows.
pub struct ConditionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::condition::Model,
}

impl<'a> ConditionFactory<'a> {
    /// Creates a new ConditionFactory with default values from fixture.
    ///
    /// The name is set to `"Condition {n}"` with an auto-incremented n.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ConditionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::condition::entity_builder()
            .name(format!("Condition {}", next_id()))
            .build();

        Self { db, entity }
    }

    /// Sets the condition name.
    ///
    /// # Arguments
    /// - `name` - Unique display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the description.
    ///
    /// # Arguments
    /// - `description` - Optional description text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    /// Builds and inserts the condition entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::condition::Model)` - Created condition entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::condition::Model, DbErr> {
        entity::condition::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            created_date: ActiveValue::Set(self.entity.created_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a condition with default values.
///
/// Shorthand for `ConditionFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::condition::Model)` - Created condition entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_condition(db: &DatabaseConnection) -> Result<entity::condition::Model, DbErr> {
    ConditionFactory::new(db).build().await
}

/// Creates a condition with the given name.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Condition name
///
/// # Returns
/// - `Ok(entity::condition::Model)` - Created condition entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_condition_named(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::condition::Model, DbErr> {
    ConditionFactory::new(db).name(name).build().await
}
