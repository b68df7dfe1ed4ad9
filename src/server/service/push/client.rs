//! Outbound HTTP client for the push gateway.
//!
//! Requests use the FCM legacy HTTP shape: a JSON body `{to, notification: {title, body}}`
//! posted with an `Authorization: key=<server key>` header.

use axum::http::header::AUTHORIZATION;
use serde::Serialize;

use crate::server::{error::AppError, model::push::PushMessage};

#[derive(Serialize)]
struct PushRequest<'a> {
    to: &'a str,
    notification: PushNotification<'a>,
}

#[derive(Serialize)]
struct PushNotification<'a> {
    title: &'a str,
    body: &'a str,
}

/// Push gateway client. Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct PushClient {
    http: reqwest::Client,
    api_url: String,
    server_key: String,
}

impl PushClient {
    pub fn new(http: reqwest::Client, api_url: String, server_key: String) -> Self {
        Self {
            http,
            api_url,
            server_key,
        }
    }

    /// Sends one notification to a device token.
    ///
    /// # Returns
    /// - `Ok(())` - Gateway accepted the request with a 2xx status
    /// - `Err(AppError::ReqwestErr)` - Connection failure or non-2xx status
    pub async fn send(&self, token: &str, message: PushMessage) -> Result<(), AppError> {
        self.http
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("key={}", self.server_key))
            .json(&PushRequest {
                to: token,
                notification: PushNotification {
                    title: message.title,
                    body: message.body,
                },
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
