use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string_len(User::Name, 50))
                    .col(text_null(User::Bio))
                    .col(string_null(User::PhoneNumber))
                    .col(string_len(User::Email, 50))
                    .col(string_len(User::UserName, 50))
                    .col(string_len_uniq(User::NormalizedEmail, 50))
                    .col(string(User::PasswordHash))
                    .col(
                        timestamp_with_time_zone(User::CreatedDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Bio,
    PhoneNumber,
    Email,
    UserName,
    NormalizedEmail,
    PasswordHash,
    CreatedDate,
}
