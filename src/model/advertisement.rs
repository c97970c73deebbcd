use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::model::{category::CategoryDto, condition::ConditionDto, user::UserDto};

/// Highest accepted asking price.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisementDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
    pub user_id: String,
    pub user: Option<UserDto>,
    pub category_id: i32,
    pub category: Option<CategoryDto>,
    pub condition_id: i32,
    pub condition: Option<ConditionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdvertisementDto {
    #[validate(length(min = 1, max = 50, message = "Title must be between 1 and 50 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,
    #[validate(range(min = 1, message = "Category id must be positive"))]
    pub category_id: i32,
    #[validate(range(min = 1, message = "Condition id must be positive"))]
    pub condition_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdvertisementDto {
    #[validate(length(min = 1, max = 50, message = "Title must be between 1 and 50 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,
    #[validate(range(min = 1, message = "Category id must be positive"))]
    pub category_id: i32,
    #[validate(range(min = 1, message = "Condition id must be positive"))]
    pub condition_id: i32,
}

/// Accepts prices in the half-open range (0, 1e9] with at most two decimal places.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() || price.is_zero() {
        return Err(ValidationError::new("price_not_positive")
            .with_message("Price must be greater than 0".into()));
    }

    if *price > MAX_PRICE {
        return Err(ValidationError::new("price_too_high")
            .with_message("Price must be at most 1000000000".into()));
    }

    if price.normalize().scale() > 2 {
        return Err(ValidationError::new("price_too_precise")
            .with_message("Price must have at most two decimal places".into()));
    }

    Ok(())
}
