//! Order factory for creating test order entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders for a given buyer and product.
///
/// The total price is stored as given; the factory does not recompute it.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    login_no: i32,
    item_cd: String,
    order_cd: String,
    order_cnt: i32,
    discount_price: i64,
    total_price: i64,
    order_status_cd: String,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_cd: `"OD{login_no}T{id}"`
    /// - order_cnt: `1`, discount_price: `0`, total_price: `12_500`
    /// - order_status_cd: `"OSC001"`
    pub fn new(db: &'a DatabaseConnection, login_no: i32, item_cd: impl Into<String>) -> Self {
        Self {
            db,
            login_no,
            item_cd: item_cd.into(),
            order_cd: format!("OD{}T{}", login_no, next_id()),
            order_cnt: 1,
            discount_price: 0,
            total_price: 12_500,
            order_status_cd: "OSC001".to_string(),
        }
    }

    pub fn order_cd(mut self, order_cd: impl Into<String>) -> Self {
        self.order_cd = order_cd.into();
        self
    }

    pub fn order_cnt(mut self, order_cnt: i32) -> Self {
        self.order_cnt = order_cnt;
        self
    }

    pub fn total_price(mut self, total_price: i64) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn order_status_cd(mut self, order_status_cd: impl Into<String>) -> Self {
        self.order_status_cd = order_status_cd.into();
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            order_cd: ActiveValue::Set(self.order_cd),
            login_no: ActiveValue::Set(self.login_no),
            item_cd: ActiveValue::Set(self.item_cd),
            order_cnt: ActiveValue::Set(self.order_cnt),
            discount_price: ActiveValue::Set(self.discount_price),
            total_price: ActiveValue::Set(self.total_price),
            order_status_cd: ActiveValue::Set(self.order_status_cd),
            order_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for the given buyer and product.
pub async fn create_order(
    db: &DatabaseConnection,
    login_no: i32,
    item_cd: &str,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, login_no, item_cd).build().await
}
