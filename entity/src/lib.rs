//! SeaORM entity models for the marketplace schema.

pub mod prelude;

pub mod item_counter;
pub mod order;
pub mod order_log;
pub mod product;
pub mod push_token;
pub mod user;
