use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait,
};
use std::marker::PhantomData;

use crate::server::data::Repository;

type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Repository over any SeaORM entity, keyed by the entity's primary key.
///
/// Auto-increment keys are left for the database to assign on create; externally issued
/// keys such as user ids are inserted as given.
pub struct EntityRepository<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E: EntityTrait> EntityRepository<'a, E> {
    /// Creates a new EntityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EntityRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }
}

/// Marks every value of an active model built from a `Model` as `Set`.
///
/// `into_active_model` yields `Unchanged` values which would be skipped by updates.
/// Primary key columns are kept `Unchanged` when `skip_primary_key` is set so the update
/// filters on them instead of rewriting them.
fn mark_all_set<E>(active: &mut E::ActiveModel, skip_primary_key: bool)
where
    E: EntityTrait,
    E::ActiveModel: ActiveModelTrait<Entity = E>,
{
    for column in E::Column::iter() {
        if skip_primary_key && E::PrimaryKey::from_column(column).is_some() {
            continue;
        }

        if let ActiveValue::Unchanged(value) = active.get(column) {
            active.set(column, value);
        }
    }
}

#[async_trait]
impl<'a, E> Repository<E::Model> for EntityRepository<'a, E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Clone + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    PrimaryKeyOf<E>: Clone + Send + Sync,
{
    type Id = PrimaryKeyOf<E>;

    async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.db).await
    }

    async fn get(&self, id: Self::Id) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    async fn create(&self, item: &mut E::Model) -> Result<(), DbErr> {
        let mut active = item.clone().into_active_model();
        mark_all_set::<E>(&mut active, false);

        if <E::PrimaryKey as PrimaryKeyTrait>::auto_increment() {
            for key in E::PrimaryKey::iter() {
                active.not_set(key.into_column());
            }
        }

        *item = active.insert(self.db).await?;

        Ok(())
    }

    async fn update(&self, item: &E::Model) -> Result<(), DbErr> {
        let mut active = item.clone().into_active_model();
        mark_all_set::<E>(&mut active, true);

        active.update(self.db).await?;

        Ok(())
    }

    async fn delete(&self, id: Self::Id) -> Result<(), DbErr> {
        E::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
