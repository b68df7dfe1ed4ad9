use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::order::{CreateOrderParam, OrderStatus},
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod list_by_user;
mod update_status_if;
