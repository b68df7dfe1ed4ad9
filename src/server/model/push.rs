use crate::server::model::order::OrderStatus;

/// Notification text sent to a buyer when their order changes status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushMessage {
    pub title: &'static str,
    pub body: &'static str,
}

impl PushMessage {
    pub const ORDER_ACCEPTED: PushMessage = PushMessage {
        title: "Order accepted",
        body: "Your order has been accepted.",
    };
    pub const ORDER_PREPARING: PushMessage = PushMessage {
        title: "Preparing your order",
        body: "Your order is being prepared.",
    };
    pub const SHIPPING_STARTED: PushMessage = PushMessage {
        title: "Shipping started",
        body: "Your order is on its way.",
    };
    pub const DELIVERY_COMPLETE: PushMessage = PushMessage {
        title: "Delivered",
        body: "Your order has been delivered.",
    };
    pub const REFUND_REQUESTED: PushMessage = PushMessage {
        title: "Refund requested",
        body: "Your refund request has been received.",
    };
    pub const REFUND_COMPLETE: PushMessage = PushMessage {
        title: "Refund complete",
        body: "Your refund has been completed.",
    };

    /// Message for an order entering `status`, or `None` when the status is silent.
    pub fn for_status(status: OrderStatus) -> Option<PushMessage> {
        match status {
            OrderStatus::Accepted => Some(Self::ORDER_ACCEPTED),
            OrderStatus::Preparing => Some(Self::ORDER_PREPARING),
            OrderStatus::ShippingStarted => Some(Self::SHIPPING_STARTED),
            OrderStatus::DeliveryComplete => Some(Self::DELIVERY_COMPLETE),
            OrderStatus::RefundRequested => Some(Self::REFUND_REQUESTED),
            OrderStatus::RefundComplete => Some(Self::REFUND_COMPLETE),
            OrderStatus::PaymentConfirmed | OrderStatus::Packed | OrderStatus::InTransit => None,
        }
    }
}
