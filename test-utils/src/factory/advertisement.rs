//! Advertisement factory for creating test advertisement entities.
//!
//! The owner, category and condition must already exist; use
//! `helpers::create_advertisement_with_dependencies` to create them together.

use crate::factory::helpers::next_id;
use crate::fixture;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test advertisements.
///
/// # Example
///
/// ```rust,ignore
/// let ad = AdvertisementFactory::new(&db, &user.id, category.id, condition.id)
///     .title("Road bike")
///     .price(Decimal::new(120, 0))
///     .build()
///     .await?;
/// ```
pub struct AdvertisementFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::advertisement::Model,
}

impl<'a> AdvertisementFactory<'a> {
    /// Creates a new AdvertisementFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owner of the advertisement
    /// - `category_id` - Category the advertisement is listed under
    /// - `condition_id` - Condition tier of the item
    ///
    /// # Returns
    /// - `AdvertisementFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: impl Into<String>,
        category_id: i32,
        condition_id: i32,
    ) -> Self {
        let entity = fixture::advertisement::entity_builder()
            .title(format!("Advertisement {}", next_id()))
            .user_id(user_id)
            .category_id(category_id)
            .condition_id(condition_id)
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.entity.price = price;
        self
    }

    /// Builds and inserts the advertisement entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::advertisement::Model)` - Created advertisement entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::advertisement::Model, DbErr> {
        entity::advertisement::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
            description: ActiveValue::Set(self.entity.description),
            price: ActiveValue::Set(self.entity.price),
            created_date: ActiveValue::Set(self.entity.created_date),
            user_id: ActiveValue::Set(self.entity.user_id),
            category_id: ActiveValue::Set(self.entity.category_id),
            condition_id: ActiveValue::Set(self.entity.condition_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an advertisement with default values for the given owner and lookups.
///
/// # Returns
/// - `Ok(entity::advertisement::Model)` - Created advertisement entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_advertisement(
    db: &DatabaseConnection,
    user_id: &str,
    category_id: i32,
    condition_id: i32,
) -> Result<entity::advertisement::Model, DbErr> {
    AdvertisementFactory::new(db, user_id, category_id, condition_id)
        .build()
        .await
}
