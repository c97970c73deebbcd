//! Role factory for seeding roles and role assignments.
//!
//! Tests build their schema from entities rather than migrations, so the default
//! roles must be seeded explicitly.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts the "User" and "Admin" roles with their fixed ids.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Vec<entity::role::Model>)` - Seeded roles, "User" first
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_roles(db: &DatabaseConnection) -> Result<Vec<entity::role::Model>, DbErr> {
    let mut roles = Vec::new();

    for role in [fixture::role::user_role(), fixture::role::admin_role()] {
        let inserted = entity::role::ActiveModel {
            id: ActiveValue::Set(role.id),
            name: ActiveValue::Set(role.name),
            normalized_name: ActiveValue::Set(role.normalized_name),
        }
        .insert(db)
        .await?;

        roles.push(inserted);
    }

    Ok(roles)
}

/// Assigns a role to a user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of an existing user
/// - `role_id` - Id of an existing role
///
/// # Returns
/// - `Ok(entity::user_role::Model)` - Created assignment
/// - `Err(DbErr)` - Database error during insert
pub async fn assign_role(
    db: &DatabaseConnection,
    user_id: &str,
    role_id: &str,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        role_id: ActiveValue::Set(role_id.to_string()),
    }
    .insert(db)
    .await
}
