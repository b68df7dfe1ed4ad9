//! Order placement and lifecycle management.
//!
//! Placement prices the order on the server and rejects any client total that differs.
//! Status changes follow the lifecycle in `OrderStatus::can_transition_to`; the status
//! write, its log row and the fulfilled-quantity counter adjustment commit together, and
//! the buyer's push notification is sent only after that commit.

use chrono::{Local, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        counter::CounterRepository, order::OrderRepository, order_log::OrderLogRepository,
        product::ProductRepository,
    },
    error::{order::OrderError, AppError},
    model::{
        order::{
            compute_total_price, order_code, CreateOrderParam, Order, OrderDetail, OrderLog,
            OrderStatus, PlaceOrderParam, UpdateOrderStatusParam, ORDER_COUNT_KEY,
        },
        push::PushMessage,
    },
    service::push::{client::PushClient, spawn_push},
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    push_client: Option<&'a PushClient>,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, push_client: Option<&'a PushClient>) -> Self {
        Self { db, push_client }
    }

    /// Places an order after validating the client's total against the server price.
    ///
    /// The order row and its initial `Accepted` log row are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order created in the `Accepted` status
    /// - `Err(AppError::NotFound)` - Product missing or deleted
    /// - `Err(AppError::OrderErr)` - Bad quantity or discount, product not on sale,
    ///   overflow, or total mismatch
    /// - `Err(AppError::DbErr)` - Insert failed; nothing was written
    pub async fn place(&self, param: PlaceOrderParam) -> Result<Order, AppError> {
        let product = ProductRepository::new(self.db)
            .find_by_item_cd(&param.item_cd)
            .await?
            .filter(|p| !p.is_deleted())
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", param.item_cd)))?;

        let server_total = compute_total_price(
            param.order_cnt,
            product.item_price,
            product.delivery_price,
            param.discount_price,
        )?;

        let now = Utc::now();
        if !product.is_on_sale_at(now) {
            return Err(OrderError::NotOnSale(product.item_cd).into());
        }

        if param.client_total != server_total {
            tracing::error!(
                "Total price mismatch for user {} on {}: client {} server {}",
                param.login_no,
                product.item_cd,
                param.client_total,
                server_total
            );
            return Err(OrderError::TotalPriceMismatch {
                client: param.client_total,
                server: server_total,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let order = OrderRepository::new(&txn)
            .create(CreateOrderParam {
                order_cd: order_code(param.login_no, now.with_timezone(&Local)),
                login_no: param.login_no,
                item_cd: product.item_cd,
                order_cnt: param.order_cnt,
                discount_price: param.discount_price,
                total_price: server_total,
                order_date: now,
            })
            .await?;
        OrderLogRepository::new(&txn)
            .create(&order.order_cd, OrderStatus::Accepted)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} placed order {}", order.login_no, order.order_cd);
        self.notify(&order);

        Ok(order)
    }

    /// Gets the buyer's orders, newest first, with product names
    pub async fn list_for_user(&self, login_no: i32) -> Result<Vec<OrderDetail>, AppError> {
        OrderRepository::new(self.db).list_by_user(login_no).await
    }

    /// Moves an order to a new status.
    ///
    /// Entering `DeliveryComplete` adds the order quantity to the item's `ORDER_CNT`
    /// counter and entering `RefundComplete` subtracts it. Item and quantity come from
    /// the stored order.
    ///
    /// # Returns
    /// - `Ok(Order)` - The order in its new status
    /// - `Err(AppError::NotFound)` - No such order
    /// - `Err(AppError::OrderErr(IllegalTransition))` - Lifecycle forbids the move
    /// - `Err(AppError::OrderErr(ConcurrentUpdate))` - Status changed since it was read
    pub async fn update_status(&self, param: UpdateOrderStatusParam) -> Result<Order, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_order_cd(&param.order_cd)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", param.order_cd)))?;

        self.transition(order, param.status).await
    }

    /// Moves an already loaded order to `next`.
    ///
    /// The write only applies while the stored status still equals `order.status`. If
    /// another writer moved the order after it was loaded, nothing is written: no status
    /// change, no log row and no counter adjustment.
    ///
    /// # Returns
    /// - `Ok(Order)` - The order in its new status
    /// - `Err(AppError::OrderErr(IllegalTransition))` - Lifecycle forbids the move
    /// - `Err(AppError::OrderErr(ConcurrentUpdate))` - Stored status differs from `order.status`
    pub async fn transition(&self, order: Order, next: OrderStatus) -> Result<Order, AppError> {
        if !order.status.can_transition_to(next) {
            return Err(OrderError::IllegalTransition {
                from: order.status.code(),
                to: next.code(),
            }
            .into());
        }

        let txn = self.db.begin().await?;

        // Rolled back on drop if any step below fails.
        if !OrderRepository::new(&txn)
            .update_status_if(&order.order_cd, order.status, next)
            .await?
        {
            return Err(OrderError::ConcurrentUpdate(order.order_cd).into());
        }
        OrderLogRepository::new(&txn)
            .create(&order.order_cd, next)
            .await?;
        if let Some(delta) = next.counter_delta(order.order_cnt) {
            CounterRepository::new(&txn)
                .adjust(ORDER_COUNT_KEY, &order.item_cd, delta)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Order {} moved from {} to {}",
            order.order_cd,
            order.status.code(),
            next.code()
        );

        let order = Order {
            status: next,
            ..order
        };
        self.notify(&order);

        Ok(order)
    }

    /// Gets an order together with its status history, oldest entry first.
    pub async fn history(&self, order_cd: &str) -> Result<Option<(Order, Vec<OrderLog>)>, AppError> {
        let Some(order) = OrderRepository::new(self.db)
            .find_by_order_cd(order_cd)
            .await?
        else {
            return Ok(None);
        };

        let logs = OrderLogRepository::new(self.db)
            .list_by_order(order_cd)
            .await?;

        Ok(Some((order, logs)))
    }

    /// Spawns the buyer notification for the order's current status, if it has one.
    fn notify(&self, order: &Order) {
        if let Some(message) = PushMessage::for_status(order.status) {
            spawn_push(
                self.db.clone(),
                self.push_client.cloned(),
                order.login_no,
                message,
            );
        }
    }
}
