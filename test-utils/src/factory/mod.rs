//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that depend on other rows (products need a
//! seller, orders need a buyer and a product) take the parent keys explicitly; the
//! `helpers` module builds the whole chain in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let product = factory::create_product(&db, user.login_no).await?;
//!
//! let (buyer, product, order) = factory::helpers::create_order_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db, seller.login_no)
//!     .item_price(12_000)
//!     .delivery_price(3_000)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod order;
pub mod product;
pub mod user;

pub use order::create_order;
pub use product::create_product;
pub use user::create_user;
