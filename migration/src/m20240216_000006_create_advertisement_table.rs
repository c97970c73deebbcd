use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240216_000001_create_user_table::User, m20240216_000004_create_category_table::Category,
    m20240216_000005_create_condition_table::Condition,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advertisement::Table)
                    .if_not_exists()
                    .col(pk_auto(Advertisement::Id))
                    .col(string_len(Advertisement::Title, 50))
                    .col(text_null(Advertisement::Description))
                    .col(decimal_len(Advertisement::Price, 12, 2))
                    .col(
                        timestamp_with_time_zone(Advertisement::CreatedDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Advertisement::UserId))
                    .col(integer(Advertisement::CategoryId))
                    .col(integer(Advertisement::ConditionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_advertisement_user_id")
                            .from(Advertisement::Table, Advertisement::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_advertisement_category_id")
                            .from(Advertisement::Table, Advertisement::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_advertisement_condition_id")
                            .from(Advertisement::Table, Advertisement::ConditionId)
                            .to(Condition::Table, Condition::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advertisement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Advertisement {
    Table,
    Id,
    Title,
    Description,
    Price,
    CreatedDate,
    UserId,
    CategoryId,
    ConditionId,
}
