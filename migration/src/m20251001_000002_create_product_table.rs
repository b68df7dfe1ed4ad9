use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(string(Product::ItemCd).primary_key())
                    .col(integer(Product::LoginNo))
                    .col(string(Product::ItemNm))
                    .col(big_integer(Product::ItemPrice))
                    .col(big_integer(Product::DeliveryPrice).default(0))
                    .col(string(Product::CategoryCd))
                    .col(string(Product::DivisionCd))
                    .col(string(Product::Status))
                    .col(string_len(Product::DispYn, 1).default("Y"))
                    .col(string_len(Product::DelYn, 1).default("N"))
                    .col(timestamp_with_time_zone_null(Product::SaleStartDate))
                    .col(timestamp_with_time_zone_null(Product::SaleEndDate))
                    .col(
                        timestamp_with_time_zone(Product::RegDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_login_no")
                            .from(Product::Table, Product::LoginNo)
                            .to(User::Table, User::LoginNo)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_login_no_reg_date")
                    .table(Product::Table)
                    .col(Product::LoginNo)
                    .col(Product::RegDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    ItemCd,
    LoginNo,
    ItemNm,
    ItemPrice,
    DeliveryPrice,
    CategoryCd,
    DivisionCd,
    Status,
    DispYn,
    DelYn,
    SaleStartDate,
    SaleEndDate,
    RegDate,
}
