use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Role lookups and assignments.
///
/// Generic over the connection so assignments can share the registration transaction.
pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a role by name, case-insensitively.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::NormalizedName.eq(name.to_uppercase()))
            .one(self.db)
            .await
    }

    /// Gives `user_id` the role `role_id`.
    pub async fn assign(&self, user_id: &str, role_id: &str) -> Result<(), DbErr> {
        entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            role_id: ActiveValue::Set(role_id.to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
