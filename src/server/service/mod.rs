//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer and
//! are responsible for:
//!
//! - **Existence checks**: every get, update and delete fetches first and reports NotFound
//! - **Timestamps**: `created_date` is stamped here on create and never changed afterwards
//! - **Search**: case-insensitive filtering of list results
//! - **Identity**: credential verification, token issuance and registration

pub mod auth;
pub mod jwt;
pub mod password;
pub mod resource;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{advertisement::AdvertisementRepository, repository::EntityRepository},
    model::{
        advertisement::AdvertisementResource, category::CategoryResource,
        condition::ConditionResource, user::UserResource,
    },
    service::resource::ResourceService,
};

pub type CategoryService<'a> =
    ResourceService<CategoryResource, EntityRepository<'a, entity::category::Entity>>;

pub type ConditionService<'a> =
    ResourceService<ConditionResource, EntityRepository<'a, entity::condition::Entity>>;

pub type UserService<'a> = ResourceService<UserResource, EntityRepository<'a, entity::user::Entity>>;

pub type AdvertisementService<'a> =
    ResourceService<AdvertisementResource, AdvertisementRepository<'a>>;

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_repository(EntityRepository::new(db))
    }
}

impl<'a> ConditionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_repository(EntityRepository::new(db))
    }
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_repository(EntityRepository::new(db))
    }
}

impl<'a> AdvertisementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_repository(AdvertisementRepository::new(db))
    }
}
