use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000001_create_user_table::User, m20251001_000002_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(string(Orders::OrderCd).primary_key())
                    .col(integer(Orders::LoginNo))
                    .col(string(Orders::ItemCd))
                    .col(integer(Orders::OrderCnt))
                    .col(big_integer(Orders::DiscountPrice).default(0))
                    .col(big_integer(Orders::TotalPrice))
                    .col(string(Orders::OrderStatusCd))
                    .col(
                        timestamp_with_time_zone(Orders::OrderDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_login_no")
                            .from(Orders::Table, Orders::LoginNo)
                            .to(User::Table, User::LoginNo)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_item_cd")
                            .from(Orders::Table, Orders::ItemCd)
                            .to(Product::Table, Product::ItemCd)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    OrderCd,
    LoginNo,
    ItemCd,
    OrderCnt,
    DiscountPrice,
    TotalPrice,
    OrderStatusCd,
    OrderDate,
}
