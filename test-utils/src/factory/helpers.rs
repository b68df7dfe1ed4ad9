//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a buyer, a seller-owned product and an order for that product.
///
/// The seller and buyer are distinct users. The order uses factory defaults
/// (quantity 1, status `OSC001`).
///
/// # Returns
/// - `Ok((buyer, product, order))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::product::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let seller = crate::factory::user::create_user(db).await?;
    let buyer = crate::factory::user::create_user(db).await?;
    let product = crate::factory::product::create_product(db, seller.login_no).await?;
    let order = crate::factory::order::create_order(db, buyer.login_no, &product.item_cd).await?;

    Ok((buyer, product, order))
}
