use sea_orm::entity::prelude::*;

/// Append-only audit row written on every order status change.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_cd: String,
    pub order_status_cd: String,
    pub log_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderCd",
        to = "super::order::Column::OrderCd",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
