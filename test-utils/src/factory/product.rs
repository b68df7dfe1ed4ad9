//! Product factory for creating test product entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products owned by a given seller.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    login_no: i32,
    item_cd: String,
    item_nm: String,
    item_price: i64,
    delivery_price: i64,
    category_cd: String,
    division_cd: String,
    disp_yn: String,
    del_yn: String,
    sale_start_date: Option<DateTime<Utc>>,
    sale_end_date: Option<DateTime<Utc>>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - item_cd: `"IT{id}"`
    /// - item_price: `10_000`, delivery_price: `2_500`
    /// - category_cd: `"CAT01"`, division_cd: `"DIV01"`
    /// - displayed and not deleted
    pub fn new(db: &'a DatabaseConnection, login_no: i32) -> Self {
        let id = next_id();
        Self {
            db,
            login_no,
            item_cd: format!("IT{}", id),
            item_nm: format!("Item {}", id),
            item_price: 10_000,
            delivery_price: 2_500,
            category_cd: "CAT01".to_string(),
            division_cd: "DIV01".to_string(),
            disp_yn: "Y".to_string(),
            del_yn: "N".to_string(),
            sale_start_date: None,
            sale_end_date: None,
        }
    }

    pub fn item_cd(mut self, item_cd: impl Into<String>) -> Self {
        self.item_cd = item_cd.into();
        self
    }

    pub fn item_nm(mut self, item_nm: impl Into<String>) -> Self {
        self.item_nm = item_nm.into();
        self
    }

    pub fn item_price(mut self, item_price: i64) -> Self {
        self.item_price = item_price;
        self
    }

    pub fn delivery_price(mut self, delivery_price: i64) -> Self {
        self.delivery_price = delivery_price;
        self
    }

    pub fn category_cd(mut self, category_cd: impl Into<String>) -> Self {
        self.category_cd = category_cd.into();
        self
    }

    pub fn disp_yn(mut self, disp_yn: impl Into<String>) -> Self {
        self.disp_yn = disp_yn.into();
        self
    }

    pub fn del_yn(mut self, del_yn: impl Into<String>) -> Self {
        self.del_yn = del_yn.into();
        self
    }

    /// Sets the sale window. `None` leaves that end open.
    pub fn sale_window(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        self.sale_start_date = start;
        self.sale_end_date = end;
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            item_cd: ActiveValue::Set(self.item_cd),
            login_no: ActiveValue::Set(self.login_no),
            item_nm: ActiveValue::Set(self.item_nm),
            item_price: ActiveValue::Set(self.item_price),
            delivery_price: ActiveValue::Set(self.delivery_price),
            category_cd: ActiveValue::Set(self.category_cd),
            division_cd: ActiveValue::Set(self.division_cd),
            status: ActiveValue::Set("SALE".to_string()),
            disp_yn: ActiveValue::Set(self.disp_yn),
            del_yn: ActiveValue::Set(self.del_yn),
            sale_start_date: ActiveValue::Set(self.sale_start_date),
            sale_end_date: ActiveValue::Set(self.sale_end_date),
            reg_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values for the given seller.
pub async fn create_product(
    db: &DatabaseConnection,
    login_no: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, login_no).build().await
}
