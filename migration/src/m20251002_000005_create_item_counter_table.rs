use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemCounter::Table)
                    .if_not_exists()
                    .col(string(ItemCounter::CounterKey))
                    .col(string(ItemCounter::ItemCd))
                    .col(big_integer(ItemCounter::Count).default(0))
                    .primary_key(
                        Index::create()
                            .col(ItemCounter::CounterKey)
                            .col(ItemCounter::ItemCd),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemCounter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItemCounter {
    Table,
    CounterKey,
    ItemCd,
    Count,
}
