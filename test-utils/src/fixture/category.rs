//! Category fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating category entity models without database insertion.

use chrono::{DateTime, Utc};
use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Electronics";

/// Default test category description.
pub const DEFAULT_DESCRIPTION: &str = "Phones, laptops and accessories";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Electronics"`
/// - description: `Some("Phones, laptops and accessories")`
///
/// # Returns
/// - `category::Model` - In-memory category entity
pub fn entity() -> category::Model {
    entity_builder().build()
}

/// Creates a category entity builder for customization.
///
/// # Returns
/// - `CategoryEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for creating customized category entity models.
pub struct CategoryEntityBuilder {
    id: i32,
    name: String,
    description: Option<String>,
    created_date: DateTime<Utc>,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            created_date: Utc::now(),
        }
    }
}

impl CategoryEntityBuilder {
    /// Sets the category ID.
    ///
    /// # Arguments
    /// - `id` - Category ID
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the category name.
    ///
    /// # Arguments
    /// - `name` - Unique display name
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the optional description.
    ///
    /// # Arguments
    /// - `description` - Free-form description text
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the creation timestamp.
    ///
    /// # Arguments
    /// - `created_date` - UTC timestamp
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date;
        self
    }

    /// Builds and returns the category entity model.
    ///
    /// # Returns
    /// - `category::Model` - In-memory category entity with configured values
    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            created_date: self.created_date,
        }
    }
}
