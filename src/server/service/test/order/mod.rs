use super::{start_push_gateway, wait_for_pushes};
use crate::server::{
    data::{counter::CounterRepository, order::OrderRepository, order_log::OrderLogRepository},
    error::{order::OrderError, AppError},
    model::{
        order::{OrderStatus, PlaceOrderParam, UpdateOrderStatusParam, ORDER_COUNT_KEY},
        push::PushMessage,
    },
    service::{
        order::OrderService,
        push::{client::PushClient, PushService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod history;
mod place;
mod update_status;

fn place_param(login_no: i32, item_cd: &str, order_cnt: i32, client_total: i64) -> PlaceOrderParam {
    PlaceOrderParam {
        login_no,
        item_cd: item_cd.to_string(),
        order_cnt,
        discount_price: 0,
        client_total,
    }
}

fn status_param(order_cd: &str, status: OrderStatus) -> UpdateOrderStatusParam {
    UpdateOrderStatusParam {
        order_cd: order_cd.to_string(),
        status,
    }
}
