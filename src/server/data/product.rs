//! Product data repository for database operations.
//!
//! Provides the `ProductRepository` for registering products, single-product lookups and
//! the filtered, sorted and paginated listing of a seller's products.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::product::{
    CreateProductParam, PaginatedProducts, Product, ProductSearchParam, ProductSort,
};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a product as displayed, not deleted and on sale.
    ///
    /// # Arguments
    /// - `item_cd` - Generated item code for the new product
    /// - `param` - Validated product fields
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        item_cd: String,
        param: CreateProductParam,
    ) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            item_cd: ActiveValue::Set(item_cd),
            login_no: ActiveValue::Set(param.login_no),
            item_nm: ActiveValue::Set(param.item_nm),
            item_price: ActiveValue::Set(param.item_price),
            delivery_price: ActiveValue::Set(param.delivery_price),
            category_cd: ActiveValue::Set(param.category_cd),
            division_cd: ActiveValue::Set(param.division_cd),
            status: ActiveValue::Set("SALE".to_string()),
            disp_yn: ActiveValue::Set("Y".to_string()),
            del_yn: ActiveValue::Set("N".to_string()),
            sale_start_date: ActiveValue::Set(param.sale_start_date),
            sale_end_date: ActiveValue::Set(param.sale_end_date),
            reg_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    /// Finds a product by item code, including deleted products.
    pub async fn find_by_item_cd(&self, item_cd: &str) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(item_cd.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Product::from_entity))
    }

    /// Gets one page of a seller's products.
    ///
    /// Every filter in `param` is optional and applied only when present. Ties in the
    /// requested sort are broken by item code so paging is stable.
    ///
    /// # Returns
    /// - `Ok(PaginatedProducts)` - Products for the requested page and the total match count
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn search(&self, param: ProductSearchParam) -> Result<PaginatedProducts, DbErr> {
        use entity::product::Column;

        let query = entity::prelude::Product::find()
            .filter(Column::LoginNo.eq(param.login_no))
            .apply_if(param.del_yn, |q, v| q.filter(Column::DelYn.eq(v)))
            .apply_if(param.disp_yn, |q, v| q.filter(Column::DispYn.eq(v)))
            .apply_if(param.status, |q, v| q.filter(Column::Status.eq(v)))
            .apply_if(param.category_cd, |q, v| q.filter(Column::CategoryCd.eq(v)))
            .apply_if(param.division_cd, |q, v| q.filter(Column::DivisionCd.eq(v)))
            .apply_if(param.from_reg_date, |q, v| q.filter(Column::RegDate.gte(v)))
            .apply_if(param.to_reg_date, |q, v| q.filter(Column::RegDate.lt(v)));

        let query = match param.sort {
            ProductSort::Newest => query.order_by_desc(Column::RegDate),
            ProductSort::Oldest => query.order_by_asc(Column::RegDate),
            ProductSort::PriceAsc => query.order_by_asc(Column::ItemPrice),
            ProductSort::PriceDesc => query.order_by_desc(Column::ItemPrice),
        }
        .order_by_asc(Column::ItemCd);

        let paginator = query.paginate(self.db, param.per_page);
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;

        Ok(PaginatedProducts {
            products: entities.into_iter().map(Product::from_entity).collect(),
            total,
            page: param.page,
            per_page: param.per_page,
        })
    }
}
