use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_cd: String,
    pub login_no: i32,
    pub item_cd: String,
    pub order_cnt: i32,
    pub discount_price: i64,
    pub total_price: i64,
    pub order_status_cd: String,
    pub order_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::LoginNo",
        to = "super::user::Column::LoginNo",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ItemCd",
        to = "super::product::Column::ItemCd",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Product,
    #[sea_orm(has_many = "super::order_log::Entity")]
    OrderLog,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::order_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
