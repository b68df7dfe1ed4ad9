//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Pricing, credential checks and the order status lifecycle
//! - **Orchestration**: Coordinating repository calls and push delivery
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Order placement and status changes commit atomically

pub mod order;
pub mod product;
pub mod push;
pub mod user;

#[cfg(test)]
mod test;
