//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let category = factory::category::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, category, condition, advertisement) =
//!         factory::helpers::create_advertisement_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("seller@example.com")
//!     .password("Another#Pass9")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create users with a verifiable bcrypt password hash
//! - `role` - Seed the default roles and assign them
//! - `category` - Create category entities
//! - `condition` - Create condition entities
//! - `advertisement` - Create advertisement entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod advertisement;
pub mod category;
pub mod condition;
pub mod helpers;
pub mod role;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use advertisement::create_advertisement;
pub use category::create_category;
pub use condition::create_condition;
pub use role::seed_roles;
pub use user::create_user;
