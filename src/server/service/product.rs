use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{counter::CounterRepository, product::ProductRepository},
    error::AppError,
    model::{
        order::ORDER_COUNT_KEY,
        product::{CreateProductParam, PaginatedProducts, Product, ProductSearchParam},
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the seller's own products
    pub async fn my_products(
        &self,
        param: ProductSearchParam,
    ) -> Result<PaginatedProducts, AppError> {
        Ok(ProductRepository::new(self.db).search(param).await?)
    }

    /// Registers a product under a freshly generated item code.
    pub async fn insert(&self, param: CreateProductParam) -> Result<Product, AppError> {
        let item_cd = generate_item_code();

        let product = ProductRepository::new(self.db).create(item_cd, param).await?;

        tracing::info!(
            "Seller {} registered product {}",
            product.login_no,
            product.item_cd
        );

        Ok(product)
    }

    /// Gets a product that has not been deleted.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Product exists and is not deleted
    /// - `Ok(None)` - Product missing or deleted
    pub async fn detail(&self, item_cd: &str) -> Result<Option<Product>, AppError> {
        let product = ProductRepository::new(self.db)
            .find_by_item_cd(item_cd)
            .await?;

        Ok(product.filter(|p| !p.is_deleted()))
    }

    /// Gets the fulfilled order quantity of an item: delivered minus refunded.
    pub async fn ordered_count(&self, item_cd: &str) -> Result<i64, AppError> {
        Ok(CounterRepository::new(self.db)
            .get(ORDER_COUNT_KEY, item_cd)
            .await?)
    }
}

/// `IT` followed by an upper-case simple-format v4 UUID.
fn generate_item_code() -> String {
    format!("IT{}", Uuid::new_v4().simple()).to_uppercase()
}
