//! Domain models and the per-resource configuration consumed by the generic service.
//!
//! Each resource supplies its identifier type, search field and DTO conversions through
//! the [`resource::Resource`] trait; the service layer stays generic over them.

pub mod advertisement;
pub mod auth;
pub mod category;
pub mod condition;
pub mod resource;
pub mod user;
