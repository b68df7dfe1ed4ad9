use crate::server::data::push_token::PushTokenRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod upsert;
