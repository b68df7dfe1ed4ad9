pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_product_table;
mod m20251001_000003_create_order_table;
mod m20251001_000004_create_order_log_table;
mod m20251002_000005_create_item_counter_table;
mod m20251002_000006_create_push_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_product_table::Migration),
            Box::new(m20251001_000003_create_order_table::Migration),
            Box::new(m20251001_000004_create_order_log_table::Migration),
            Box::new(m20251002_000005_create_item_counter_table::Migration),
            Box::new(m20251002_000006_create_push_token_table::Migration),
        ]
    }
}
