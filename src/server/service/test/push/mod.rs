use super::{start_push_gateway, wait_for_pushes};
use crate::server::{
    error::AppError,
    model::push::PushMessage,
    service::push::{client::PushClient, spawn_push, PushDelivery, PushService},
};
use test_utils::{builder::TestBuilder, factory};


fn client(url: String) -> PushClient {
    PushClient::new(reqwest::Client::new(), url, "server-key".to_string())
}
