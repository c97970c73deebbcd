//! Advertisement repository with eager loading of related rows.
//!
//! Reads return each advertisement together with its owner, category and condition.
//! Related rows are fetched in one batched query per table and joined in memory.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;

use crate::server::{
    data::{repository::EntityRepository, Repository},
    model::advertisement::AdvertisementRecord,
};

pub struct AdvertisementRepository<'a> {
    db: &'a DatabaseConnection,
    rows: EntityRepository<'a, entity::advertisement::Entity>,
}

impl<'a> AdvertisementRepository<'a> {
    /// Creates a new AdvertisementRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AdvertisementRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            rows: EntityRepository::new(db),
        }
    }

    /// Attaches owner, category and condition to each advertisement.
    ///
    /// # Arguments
    /// - `advertisements` - Advertisement rows to enrich
    ///
    /// # Returns
    /// - `Ok(Vec<AdvertisementRecord>)` - Records in the same order as the input
    /// - `Err(DbErr)` - Database error during one of the lookups
    async fn load_related(
        &self,
        advertisements: Vec<entity::advertisement::Model>,
    ) -> Result<Vec<AdvertisementRecord>, DbErr> {
        if advertisements.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<String> = advertisements.iter().map(|a| a.user_id.clone()).collect();
        let category_ids: Vec<i32> = advertisements.iter().map(|a| a.category_id).collect();
        let condition_ids: Vec<i32> = advertisements.iter().map(|a| a.condition_id).collect();

        let users: HashMap<String, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        let categories: HashMap<i32, entity::category::Model> = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let conditions: HashMap<i32, entity::condition::Model> =
            entity::prelude::Condition::find()
                .filter(entity::condition::Column::Id.is_in(condition_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();

        Ok(advertisements
            .into_iter()
            .map(|advertisement| AdvertisementRecord {
                user: users.get(&advertisement.user_id).cloned(),
                category: categories.get(&advertisement.category_id).cloned(),
                condition: conditions.get(&advertisement.condition_id).cloned(),
                advertisement,
            })
            .collect())
    }
}

#[async_trait]
impl<'a> Repository<AdvertisementRecord> for AdvertisementRepository<'a> {
    type Id = i32;

    async fn get_all(&self) -> Result<Vec<AdvertisementRecord>, DbErr> {
        let advertisements = self.rows.get_all().await?;

        self.load_related(advertisements).await
    }

    async fn get(&self, id: i32) -> Result<Option<AdvertisementRecord>, DbErr> {
        let Some(advertisement) = self.rows.get(id).await? else {
            return Ok(None);
        };

        Ok(self.load_related(vec![advertisement]).await?.pop())
    }

    /// Inserts the advertisement, then reloads it with its related rows.
    async fn create(&self, item: &mut AdvertisementRecord) -> Result<(), DbErr> {
        self.rows.create(&mut item.advertisement).await?;

        let id = item.advertisement.id;
        *item = self
            .load_related(vec![item.advertisement.clone()])
            .await?
            .pop()
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Advertisement with id {} not found after creation",
                    id
                ))
            })?;

        Ok(())
    }

    async fn update(&self, item: &AdvertisementRecord) -> Result<(), DbErr> {
        self.rows.update(&item.advertisement).await
    }

    async fn delete(&self, id: i32) -> Result<(), DbErr> {
        self.rows.delete(id).await
    }
}
