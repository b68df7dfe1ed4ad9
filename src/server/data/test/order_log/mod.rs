use crate::server::{data::order_log::OrderLogRepository, error::AppError, model::order::OrderStatus};
use test_utils::{builder::TestBuilder, factory};
