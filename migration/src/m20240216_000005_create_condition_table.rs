use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Condition::Table)
                    .if_not_exists()
                    .col(pk_auto(Condition::Id))
                    .col(string_len_uniq(Condition::Name, 50))
                    .col(text_null(Condition::Description))
                    .col(
                        timestamp_with_time_zone(Condition::CreatedDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Quality tiers are rows so new ones can be added without a release
        manager
            .get_connection()
            .execute_unprepared(
                r#"INSERT INTO "condition" ("name", "description") VALUES
                    ('New', 'Unused item in original packaging'),
                    ('Used', 'Previously owned item in working order'),
                    ('Damaged', 'Item with defects or missing parts')"#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Condition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Condition {
    Table,
    Id,
    Name,
    Description,
    CreatedDate,
}
