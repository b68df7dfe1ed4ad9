use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub login_no: i32,
    #[sea_orm(unique)]
    pub login_id: String,
    pub login_pw: String,
    pub user_nm: String,
    pub hp_num: String,
    pub email: String,
    pub zip_no: String,
    pub road_full_addr: String,
    pub jibun_addr: String,
    pub addr_detail: String,
    pub status: String,
    pub admin: bool,
    pub reg_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
