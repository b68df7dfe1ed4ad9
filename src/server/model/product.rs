//! Product domain models and parameters.
//!
//! Defines the product listing model, creation parameters with input validation, and
//! the search parameters behind the seller's "my products" listing.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{
    model::product::{CreateProductDto, ProductDto, ProductSearchDto, ProductsDto},
    server::error::AppError,
};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Product listing owned by a seller.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub item_cd: String,
    /// Seller's login number.
    pub login_no: i32,
    pub item_nm: String,
    pub item_price: i64,
    pub delivery_price: i64,
    pub category_cd: String,
    pub division_cd: String,
    pub status: String,
    pub disp_yn: String,
    pub del_yn: String,
    pub sale_start_date: Option<DateTime<Utc>>,
    pub sale_end_date: Option<DateTime<Utc>>,
    pub reg_date: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            item_cd: entity.item_cd,
            login_no: entity.login_no,
            item_nm: entity.item_nm,
            item_price: entity.item_price,
            delivery_price: entity.delivery_price,
            category_cd: entity.category_cd,
            division_cd: entity.division_cd,
            status: entity.status,
            disp_yn: entity.disp_yn,
            del_yn: entity.del_yn,
            sale_start_date: entity.sale_start_date,
            sale_end_date: entity.sale_end_date,
            reg_date: entity.reg_date,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            item_cd: self.item_cd,
            login_no: self.login_no,
            item_nm: self.item_nm,
            item_price: self.item_price,
            delivery_price: self.delivery_price,
            category_cd: self.category_cd,
            division_cd: self.division_cd,
            status: self.status,
            disp_yn: self.disp_yn,
            del_yn: self.del_yn,
            sale_start_date: self.sale_start_date,
            sale_end_date: self.sale_end_date,
            reg_date: self.reg_date,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.del_yn == "Y"
    }

    /// Whether `now` falls inside the sale window. Open ends are unbounded.
    pub fn is_on_sale_at(&self, now: DateTime<Utc>) -> bool {
        let started = self.sale_start_date.map_or(true, |start| start <= now);
        let not_ended = self.sale_end_date.map_or(true, |end| now <= end);
        started && not_ended
    }
}

/// Parameters for registering a new product.
#[derive(Debug, Clone)]
pub struct CreateProductParam {
    pub login_no: i32,
    pub item_nm: String,
    pub item_price: i64,
    pub delivery_price: i64,
    pub category_cd: String,
    pub division_cd: String,
    pub sale_start_date: Option<DateTime<Utc>>,
    pub sale_end_date: Option<DateTime<Utc>>,
}

impl CreateProductParam {
    /// Validates the creation DTO for the given seller.
    ///
    /// # Returns
    /// - `Ok(CreateProductParam)` - Input is valid
    /// - `Err(AppError::BadRequest)` - Blank name or codes, negative prices, or a sale
    ///   window that ends before it starts
    pub fn from_dto(login_no: i32, dto: CreateProductDto) -> Result<Self, AppError> {
        if dto.item_nm.trim().is_empty() {
            return Err(AppError::BadRequest("Product name is required".to_string()));
        }
        if dto.category_cd.trim().is_empty() || dto.division_cd.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Category and division codes are required".to_string(),
            ));
        }
        if dto.item_price < 0 || dto.delivery_price < 0 {
            return Err(AppError::BadRequest(
                "Prices must not be negative".to_string(),
            ));
        }
        if let (Some(start), Some(end)) = (dto.sale_start_date, dto.sale_end_date) {
            if end < start {
                return Err(AppError::BadRequest(
                    "Sale end date is before sale start date".to_string(),
                ));
            }
        }

        Ok(Self {
            login_no,
            item_nm: dto.item_nm,
            item_price: dto.item_price,
            delivery_price: dto.delivery_price,
            category_cd: dto.category_cd,
            division_cd: dto.division_cd,
            sale_start_date: dto.sale_start_date,
            sale_end_date: dto.sale_end_date,
        })
    }
}

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
}

impl ProductSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NEWEST" => Some(Self::Newest),
            "OLDEST" => Some(Self::Oldest),
            "PRICE_ASC" => Some(Self::PriceAsc),
            "PRICE_DESC" => Some(Self::PriceDesc),
            _ => None,
        }
    }
}

/// Filter, sort and paging parameters for a seller's product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductSearchParam {
    pub login_no: i32,
    pub del_yn: Option<String>,
    pub disp_yn: Option<String>,
    pub status: Option<String>,
    pub category_cd: Option<String>,
    pub division_cd: Option<String>,
    /// Inclusive lower bound.
    pub from_reg_date: Option<DateTime<Utc>>,
    /// Exclusive upper bound (start of the day after `toRegDate`).
    pub to_reg_date: Option<DateTime<Utc>>,
    pub sort: ProductSort,
    /// Zero-indexed page.
    pub page: u64,
    pub per_page: u64,
}

impl ProductSearchParam {
    /// Converts the query DTO, translating the 1-based `pg` into a zero-indexed page.
    ///
    /// # Returns
    /// - `Ok(ProductSearchParam)` - Valid search
    /// - `Err(AppError::BadRequest)` - Unknown sort key or page size of zero
    pub fn from_dto(login_no: i32, dto: ProductSearchDto) -> Result<Self, AppError> {
        let sort = match dto.sort_status.as_deref() {
            None => ProductSort::default(),
            Some(value) => ProductSort::parse(value).ok_or_else(|| {
                AppError::BadRequest(format!("Unknown sort status '{}'", value))
            })?,
        };

        let per_page = dto.pg_sz.unwrap_or(DEFAULT_PAGE_SIZE);
        if per_page == 0 {
            return Err(AppError::BadRequest("Page size must be positive".to_string()));
        }

        Ok(Self {
            login_no,
            del_yn: dto.del_yn,
            disp_yn: dto.disp_yn,
            status: dto.status,
            category_cd: dto.category_cd,
            division_cd: dto.division_cd,
            from_reg_date: dto.from_reg_date.map(start_of_day),
            to_reg_date: dto
                .to_reg_date
                .and_then(|date| date.succ_opt())
                .map(start_of_day),
            sort,
            page: dto.pg.unwrap_or(1).max(1) - 1,
            per_page: per_page.min(MAX_PAGE_SIZE),
        })
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// One page of products with paging metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub total: u64,
    /// Zero-indexed page.
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedProducts {
    /// Converts to the API shape, where pages are 1-based.
    pub fn into_dto(self) -> ProductsDto {
        ProductsDto {
            products: self.products.into_iter().map(Product::into_dto).collect(),
            total: self.total,
            pg: self.page + 1,
            pg_sz: self.per_page,
        }
    }
}
