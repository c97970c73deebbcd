//! Database repository layer for all domain entities.
//!
//! Repositories perform the CRUD operations against SeaORM entities and never translate
//! errors: a missing row is reported as `None` and backend failures propagate as `DbErr`.
//! Existence checks and the NotFound condition live one level up in the service layer.

pub mod advertisement;
pub mod repository;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use sea_orm::DbErr;

/// Storage access for one record type.
///
/// The generic [`repository::EntityRepository`] implements this for every SeaORM entity;
/// resources that read related rows eagerly provide their own implementation.
#[async_trait]
pub trait Repository<T: Send + Sync>: Send + Sync {
    type Id: Send + Sync;

    /// Returns every row in the backend's default order.
    async fn get_all(&self) -> Result<Vec<T>, DbErr>;

    /// Returns the row with `id`, or `None` when absent.
    async fn get(&self, id: Self::Id) -> Result<Option<T>, DbErr>;

    /// Inserts `item` and writes the persisted row, including its assigned id, back into it.
    async fn create(&self, item: &mut T) -> Result<(), DbErr>;

    /// Overwrites the row whose id matches `item` with all of its field values.
    ///
    /// The row must exist; callers check beforehand.
    async fn update(&self, item: &T) -> Result<(), DbErr>;

    /// Removes the row with `id`. Removing an absent id is a no-op.
    async fn delete(&self, id: Self::Id) -> Result<(), DbErr>;
}
