//! Condition fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating condition entity models without database insertion.

use chrono::{DateTime, Utc};
use entity::condition;

/// Default test condition name.
pub const DEFAULT_NAME: &str = "Refurbished";

/// Default test condition description.
pub const DEFAULT_DESCRIPTION: &str = "Restored to working order by a seller";

/// Creates a condition entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Refurbished"`
/// - description: `Some("Restored to working order by a seller")`
///
/// # Returns
/// - `condition::Model` - In-memory condition entity
pub fn entity() -> condition::Model {
    entity_builder().build()
}

/// Creates a condition entity builder for customization.
///
/// # Returns
/// - `ConditionEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> ConditionEntityBuilder {
    ConditionEntityBuilder::default()
}

/// Builder for creating customized condition entity models.
pub struct ConditionEntityBuilder {
    id: i32,
    name: String,
    description: Option<String>,
    created_date: DateTime<Utc>,
}

impl Default for ConditionEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            created_date: Utc::now(),
        }
    }
}

impl ConditionEntityBuilder {
    /// Sets the condition ID.
    ///
    /// # Arguments
    /// - `id` - Condition ID
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the condition name.
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

    /// Builds and returns the condition entity model.
    ///
    /// # Returns
    /// - `condition::Model` - In-memory condition entity with configured values
    pub fn build(self) -> condition::Model {
        condition::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            created_date: self.created_date,
        }
    }
}
