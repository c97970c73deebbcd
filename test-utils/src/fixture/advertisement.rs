//! Advertisement fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating advertisement entity models without database
//! insertion. Foreign keys default to the ids produced by the other fixtures.

use chrono::{DateTime, Utc};
use entity::advertisement;
use rust_decimal::Decimal;

use crate::fixture;

/// Default test advertisement title.
pub const DEFAULT_TITLE: &str = "Used mountain bike";

/// Default test advertisement description.
pub const DEFAULT_DESCRIPTION: &str = "Aluminium frame, new tyres";

/// Default asking price, 250.00.
pub const DEFAULT_PRICE: Decimal = Decimal::from_parts(25000, 0, 0, false, 2);

/// Creates an advertisement entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Used mountain bike"`
/// - price: `250.00`
/// - user_id: `fixture::user::DEFAULT_ID`
/// - category_id / condition_id: `1`
///
/// # Returns
/// - `advertisement::Model` - In-memory advertisement entity
pub fn entity() -> advertisement::Model {
    entity_builder().build()
}

/// Creates an advertisement entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let ad = fixture::advertisement::entity_builder()
///     .title("Road bike")
///     .category_id(category.id)
///     .build();
/// ```
pub fn entity_builder() -> AdvertisementEntityBuilder {
    AdvertisementEntityBuilder::default()
}

/// Builder for creating customized advertisement entity models.
pub struct AdvertisementEntityBuilder {
    id: i32,
    title: String,
    description: Option<String>,
    price: Decimal,
    created_date: DateTime<Utc>,
    user_id: String,
    category_id: i32,
    condition_id: i32,
}

impl Default for AdvertisementEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            price: DEFAULT_PRICE,
            created_date: Utc::now(),
            user_id: fixture::user::DEFAULT_ID.to_string(),
            category_id: 1,
            condition_id: 1,
        }
    }
}

impl AdvertisementEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date;
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn condition_id(mut self, condition_id: i32) -> Self {
        self.condition_id = condition_id;
        self
    }

    /// Builds and returns the advertisement entity model.
    pub fn build(self) -> advertisement::Model {
        advertisement::Model {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            created_date: self.created_date,
            user_id: self.user_id,
            category_id: self.category_id,
            condition_id: self.condition_id,
        }
    }
}
