//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. The order, order
//! log and counter repositories are generic over `ConnectionTrait` so they can run inside
//! a transaction.

pub mod counter;
pub mod order;
pub mod order_log;
pub mod product;
pub mod push_token;
pub mod user;
