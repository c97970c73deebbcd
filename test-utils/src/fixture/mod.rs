//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let user = fixture::user::entity();
//!
//! // Create with custom fields
//! let seller = fixture::user::entity_builder()
//!     .email("seller@example.com")
//!     .build();
//! ```

pub mod advertisement;
pub mod category;
pub mod condition;
pub mod role;
pub mod user;

pub use advertisement::{
    entity as advertisement_entity, entity_builder as advertisement_entity_builder,
};
pub use category::{entity as category_entity, entity_builder as category_entity_builder};
pub use condition::{entity as condition_entity, entity_builder as condition_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
