//! Append-only order status history.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::order::{OrderLog, OrderStatus},
};

pub struct OrderLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records that `order_cd` entered `status` now.
    pub async fn create(&self, order_cd: &str, status: OrderStatus) -> Result<OrderLog, AppError> {
        let entity = entity::order_log::ActiveModel {
            order_cd: ActiveValue::Set(order_cd.to_string()),
            order_status_cd: ActiveValue::Set(status.code().to_string()),
            log_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        OrderLog::from_entity(entity)
    }

    /// Gets the status history of an order, oldest first.
    pub async fn list_by_order(&self, order_cd: &str) -> Result<Vec<OrderLog>, AppError> {
        entity::prelude::OrderLog::find()
            .filter(entity::order_log::Column::OrderCd.eq(order_cd))
            .order_by_asc(entity::order_log::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(OrderLog::from_entity)
            .collect()
    }
}
