use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000003_create_order_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderLog::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderLog::Id))
                    .col(string(OrderLog::OrderCd))
                    .col(string(OrderLog::OrderStatusCd))
                    .col(
                        timestamp_with_time_zone(OrderLog::LogDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_log_order_cd")
                            .from(OrderLog::Table, OrderLog::OrderCd)
                            .to(Orders::Table, Orders::OrderCd)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderLog {
    Table,
    Id,
    OrderCd,
    OrderStatusCd,
    LogDate,
}
