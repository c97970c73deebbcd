use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(string(Role::Id).primary_key())
                    .col(string(Role::Name))
                    .col(string_uniq(Role::NormalizedName))
                    .to_owned(),
            )
            .await?;

        // Default roles, every self-registered user receives "User"
        manager
            .get_connection()
            .execute_unprepared(
                r#"INSERT INTO "role" ("id", "name", "normalized_name") VALUES
                    ('6f99e991-36ae-43a6-a74f-47aec0f10f6d', 'User', 'USER'),
                    ('8b8111ff-938f-4a31-a6e9-9f160b43dbf8', 'Admin', 'ADMIN')"#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    Name,
    NormalizedName,
}
