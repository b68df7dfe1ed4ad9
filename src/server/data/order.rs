//! Order data repository for database operations.
//!
//! `OrderRepository` is generic over the connection so the order service can run it on a
//! `DatabaseTransaction` when an insert or status change must commit together with its
//! log row and counter adjustment.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::order::{CreateOrderParam, Order, OrderDetail, OrderStatus},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order in the `Accepted` status.
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order
    /// - `Err(AppError::DbErr)` - Insert failed, including a duplicate order code
    pub async fn create(&self, param: CreateOrderParam) -> Result<Order, AppError> {
        let entity = entity::order::ActiveModel {
            order_cd: ActiveValue::Set(param.order_cd),
            login_no: ActiveValue::Set(param.login_no),
            item_cd: ActiveValue::Set(param.item_cd),
            order_cnt: ActiveValue::Set(param.order_cnt),
            discount_price: ActiveValue::Set(param.discount_price),
            total_price: ActiveValue::Set(param.total_price),
            order_status_cd: ActiveValue::Set(OrderStatus::Accepted.code().to_string()),
            order_date: ActiveValue::Set(param.order_date),
        }
        .insert(self.db)
        .await?;

        Order::from_entity(entity)
    }

    pub async fn find_by_order_cd(&self, order_cd: &str) -> Result<Option<Order>, AppError> {
        entity::prelude::Order::find_by_id(order_cd.to_string())
            .one(self.db)
            .await?
            .map(Order::from_entity)
            .transpose()
    }

    /// Moves an order from `from` to `to` only if it is still in `from`.
    ///
    /// The status check and the write happen in a single UPDATE, so two concurrent
    /// updates from the same status cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - Order missing or no longer in `from`
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_status_if(
        &self,
        order_cd: &str,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Order::update_many()
            .filter(entity::order::Column::OrderCd.eq(order_cd))
            .filter(entity::order::Column::OrderStatusCd.eq(from.code()))
            .col_expr(entity::order::Column::OrderStatusCd, Expr::value(to.code()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets a buyer's orders, newest first, with each product's name.
    pub async fn list_by_user(&self, login_no: i32) -> Result<Vec<OrderDetail>, AppError> {
        let rows = entity::prelude::Order::find()
            .filter(entity::order::Column::LoginNo.eq(login_no))
            .order_by_desc(entity::order::Column::OrderDate)
            .order_by_desc(entity::order::Column::OrderCd)
            .find_also_related(entity::prelude::Product)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(order, product)| {
                Ok(OrderDetail {
                    order: Order::from_entity(order)?,
                    item_nm: product.map(|p| p.item_nm),
                })
            })
            .collect()
    }
}
