//! SeaORM entities for the marketplace schema.

pub mod prelude;

pub mod advertisement;
pub mod category;
pub mod condition;
pub mod role;
pub mod user;
pub mod user_role;
