//! Wire DTOs shared by the HTTP layer and the API documentation.

pub mod advertisement;
pub mod api;
pub mod auth;
pub mod category;
pub mod condition;
pub mod user;
