use crate::server::data::counter::CounterRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod adjust;
