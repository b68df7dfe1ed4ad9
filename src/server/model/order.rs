//! Order domain models, status lifecycle and pricing rules.
//!
//! The status codes `OSC001`..`OSC009` form a fixed lifecycle. Allowed moves between them
//! are encoded in `OrderStatus::can_transition_to`, and the two codes that affect the
//! fulfilled-quantity counter are reported by `OrderStatus::counter_delta`.

use chrono::{DateTime, Local, Utc};

use crate::{
    model::order::{OrderDetailDto, OrderDto, OrderLogDto},
    server::error::{internal::InternalError, order::OrderError, AppError},
};

/// Key of the per-item counter that tracks fulfilled order quantity.
pub const ORDER_COUNT_KEY: &str = "ORDER_CNT";

/// Order lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Accepted,
    PaymentConfirmed,
    Preparing,
    Packed,
    ShippingStarted,
    InTransit,
    DeliveryComplete,
    RefundRequested,
    RefundComplete,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 9] = [
        Self::Accepted,
        Self::PaymentConfirmed,
        Self::Preparing,
        Self::Packed,
        Self::ShippingStarted,
        Self::InTransit,
        Self::DeliveryComplete,
        Self::RefundRequested,
        Self::RefundComplete,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Accepted => "OSC001",
            Self::PaymentConfirmed => "OSC002",
            Self::Preparing => "OSC003",
            Self::Packed => "OSC004",
            Self::ShippingStarted => "OSC005",
            Self::InTransit => "OSC006",
            Self::DeliveryComplete => "OSC007",
            Self::RefundRequested => "OSC008",
            Self::RefundComplete => "OSC009",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Whether the lifecycle allows moving from `self` directly to `next`.
    ///
    /// Refunds are only reachable after delivery, and `RefundComplete` is terminal.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        matches!(
            (self, next),
            (Accepted, PaymentConfirmed)
                | (Accepted, Preparing)
                | (PaymentConfirmed, Preparing)
                | (Preparing, Packed)
                | (Preparing, ShippingStarted)
                | (Packed, ShippingStarted)
                | (ShippingStarted, InTransit)
                | (ShippingStarted, DeliveryComplete)
                | (InTransit, DeliveryComplete)
                | (DeliveryComplete, RefundRequested)
                | (RefundRequested, RefundComplete)
        )
    }

    /// Sign applied to the order quantity on the `ORDER_CNT` counter when an order
    /// enters this status. `None` for statuses that leave the counter alone.
    pub fn counter_delta(&self, order_cnt: i32) -> Option<i64> {
        match self {
            Self::DeliveryComplete => Some(i64::from(order_cnt)),
            Self::RefundComplete => Some(-i64::from(order_cnt)),
            _ => None,
        }
    }
}

/// Computes `order_cnt * item_price + delivery_price - discount_price`.
///
/// # Returns
/// - `Ok(i64)` - The order total
/// - `Err(OrderError::InvalidQuantity)` - Quantity is zero or negative
/// - `Err(OrderError::InvalidDiscount)` - Discount is negative
/// - `Err(OrderError::PriceOverflow)` - An intermediate value overflowed
pub fn compute_total_price(
    order_cnt: i32,
    item_price: i64,
    delivery_price: i64,
    discount_price: i64,
) -> Result<i64, OrderError> {
    if order_cnt <= 0 {
        return Err(OrderError::InvalidQuantity(order_cnt));
    }
    if discount_price < 0 {
        return Err(OrderError::InvalidDiscount(discount_price));
    }

    i64::from(order_cnt)
        .checked_mul(item_price)
        .and_then(|subtotal| subtotal.checked_add(delivery_price))
        .and_then(|total| total.checked_sub(discount_price))
        .ok_or(OrderError::PriceOverflow)
}

/// Builds an order code from the buyer and the local order time, e.g. `OD720251001143005`.
pub fn order_code(login_no: i32, at: DateTime<Local>) -> String {
    format!("OD{}{}", login_no, at.format("%Y%m%d%H%M%S"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_cd: String,
    /// Buyer's login number.
    pub login_no: i32,
    pub item_cd: String,
    pub order_cnt: i32,
    pub discount_price: i64,
    pub total_price: i64,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Converts an entity model to an order domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order
    /// - `Err(AppError::InternalErr(UnknownOrderStatus))` - Stored status code is not recognized
    pub fn from_entity(entity: entity::order::Model) -> Result<Self, AppError> {
        let status = OrderStatus::from_code(&entity.order_status_cd).ok_or_else(|| {
            InternalError::UnknownOrderStatus(entity.order_status_cd.clone(), entity.order_cd.clone())
        })?;

        Ok(Self {
            order_cd: entity.order_cd,
            login_no: entity.login_no,
            item_cd: entity.item_cd,
            order_cnt: entity.order_cnt,
            discount_price: entity.discount_price,
            total_price: entity.total_price,
            status,
            order_date: entity.order_date,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            order_cd: self.order_cd,
            login_no: self.login_no,
            item_cd: self.item_cd,
            order_cnt: self.order_cnt,
            discount_price: self.discount_price,
            total_price: self.total_price,
            order_status_cd: self.status.code().to_string(),
            order_date: self.order_date,
        }
    }
}

/// Order joined with the ordered product's name.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    /// `None` when the product row no longer exists.
    pub item_nm: Option<String>,
}

impl OrderDetail {
    pub fn into_dto(self) -> OrderDetailDto {
        OrderDetailDto {
            order: self.order.into_dto(),
            item_nm: self.item_nm,
        }
    }
}

/// Audit row recorded for every status an order enters.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLog {
    pub order_cd: String,
    pub status: OrderStatus,
    pub log_date: DateTime<Utc>,
}

impl OrderLog {
    pub fn from_entity(entity: entity::order_log::Model) -> Result<Self, AppError> {
        let status = OrderStatus::from_code(&entity.order_status_cd).ok_or_else(|| {
            InternalError::UnknownOrderStatus(entity.order_status_cd.clone(), entity.order_cd.clone())
        })?;

        Ok(Self {
            order_cd: entity.order_cd,
            status,
            log_date: entity.log_date,
        })
    }

    pub fn into_dto(self) -> OrderLogDto {
        OrderLogDto {
            order_cd: self.order_cd,
            order_status_cd: self.status.code().to_string(),
            log_date: self.log_date,
        }
    }
}

/// A buyer's order request, before pricing is checked.
#[derive(Debug, Clone)]
pub struct PlaceOrderParam {
    pub login_no: i32,
    pub item_cd: String,
    pub order_cnt: i32,
    pub discount_price: i64,
    /// Total computed by the client; must match the server computation.
    pub client_total: i64,
}

/// Row values for inserting a priced order.
#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub order_cd: String,
    pub login_no: i32,
    pub item_cd: String,
    pub order_cnt: i32,
    pub discount_price: i64,
    pub total_price: i64,
    pub order_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UpdateOrderStatusParam {
    pub order_cd: String,
    pub status: OrderStatus,
}

impl UpdateOrderStatusParam {
    /// # Returns
    /// - `Err(OrderError::UnknownStatus)` - Code is not one of `OSC001`..`OSC009`
    pub fn new(order_cd: String, order_status_cd: &str) -> Result<Self, OrderError> {
        let status = OrderStatus::from_code(order_status_cd)
            .ok_or_else(|| OrderError::UnknownStatus(order_status_cd.to_string()))?;

        Ok(Self { order_cd, status })
    }
}
