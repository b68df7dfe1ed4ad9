use crate::{
    model::product::CreateProductDto,
    server::{
        data::counter::CounterRepository,
        error::AppError,
        model::{
            order::ORDER_COUNT_KEY,
            product::{CreateProductParam, ProductSearchParam},
        },
        service::product::ProductService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod my_products;
