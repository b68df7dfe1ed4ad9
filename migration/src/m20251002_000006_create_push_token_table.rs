use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PushToken::Table)
                    .if_not_exists()
                    .col(string(PushToken::LoginId).primary_key())
                    .col(string(PushToken::Token))
                    .col(
                        timestamp_with_time_zone(PushToken::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PushToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PushToken {
    Table,
    LoginId,
    Token,
    UpdatedAt,
}
