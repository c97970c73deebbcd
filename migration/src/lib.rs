pub use sea_orm_migration::prelude::*;

mod m20240216_000001_create_user_table;
mod m20240216_000002_create_role_table;
mod m20240216_000003_create_user_role_table;
mod m20240216_000004_create_category_table;
mod m20240216_000005_create_condition_table;
mod m20240216_000006_create_advertisement_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240216_000001_create_user_table::Migration),
            Box::new(m20240216_000002_create_role_table::Migration),
            Box::new(m20240216_000003_create_user_role_table::Migration),
            Box::new(m20240216_000004_create_category_table::Migration),
            Box::new(m20240216_000005_create_condition_table::Migration),
            Box::new(m20240216_000006_create_advertisement_table::Migration),
        ]
    }
}
