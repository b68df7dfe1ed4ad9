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
                    .col(pk_auto(User::LoginNo))
                    .col(string_uniq(User::LoginId))
                    .col(string(User::LoginPw))
                    .col(string(User::UserNm))
                    .col(string(User::HpNum))
                    .col(string(User::Email))
                    .col(string(User::ZipNo))
                    .col(string(User::RoadFullAddr))
                    .col(string(User::JibunAddr))
                    .col(string(User::AddrDetail))
                    .col(string(User::Status).default("DEFAULT"))
                    .col(boolean(User::Admin).default(false))
                    .col(
                        timestamp_with_time_zone(User::RegDate)
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
    LoginNo,
    LoginId,
    LoginPw,
    UserNm,
    HpNum,
    Email,
    ZipNo,
    RoadFullAddr,
    JibunAddr,
    AddrDetail,
    Status,
    Admin,
    RegDate,
}
