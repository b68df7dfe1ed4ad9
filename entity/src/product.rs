use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_cd: String,
    pub login_no: i32,
    pub item_nm: String,
    pub item_price: i64,
    pub delivery_price: i64,
    pub category_cd: String,
    pub division_cd: String,
    pub status: String,
    pub disp_yn: String,
    pub del_yn: String,
    pub sale_start_date: Option<DateTimeUtc>,
    pub sale_end_date: Option<DateTimeUtc>,
    pub reg_date: DateTimeUtc,
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
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
