//! Push notification dispatch.
//!
//! `PushService` resolves a user's registered device token and hands the message to the
//! `PushClient`. Delivery is best effort: callers spawn it after their transaction has
//! committed and only log failures.

pub mod client;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{push_token::PushTokenRepository, user::UserRepository},
    error::AppError,
    model::push::PushMessage,
    service::push::client::PushClient,
};

/// What happened to a push request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushDelivery {
    Sent,
    /// The user has no registered device token.
    NoToken,
    /// No push gateway is configured.
    Disabled,
}

pub struct PushService<'a> {
    db: &'a DatabaseConnection,
    client: Option<&'a PushClient>,
}

impl<'a> PushService<'a> {
    pub fn new(db: &'a DatabaseConnection, client: Option<&'a PushClient>) -> Self {
        Self { db, client }
    }

    /// Stores or replaces the device token for a user.
    pub async fn register_token(&self, login_id: &str, token: String) -> Result<(), AppError> {
        PushTokenRepository::new(self.db)
            .upsert(login_id, token)
            .await?;

        Ok(())
    }

    /// Sends a message to the device registered for `login_id`.
    ///
    /// # Returns
    /// - `Ok(PushDelivery::Sent)` - Gateway accepted the message
    /// - `Ok(PushDelivery::NoToken)` - Nothing sent, user has no token
    /// - `Ok(PushDelivery::Disabled)` - Nothing sent, no gateway configured
    /// - `Err(AppError)` - Token lookup or gateway request failed
    pub async fn send_to_user(
        &self,
        login_id: &str,
        message: PushMessage,
    ) -> Result<PushDelivery, AppError> {
        let Some(client) = self.client else {
            tracing::debug!("Push disabled, skipping '{}' for {}", message.title, login_id);
            return Ok(PushDelivery::Disabled);
        };

        let Some(token) = PushTokenRepository::new(self.db).find(login_id).await? else {
            tracing::debug!("No push token registered for {}", login_id);
            return Ok(PushDelivery::NoToken);
        };

        client.send(&token, message).await?;

        Ok(PushDelivery::Sent)
    }

    /// Sends a message to the user with the given login number.
    ///
    /// Resolves the login id first since tokens are keyed by it. A user that no longer
    /// exists is treated as having no token.
    pub async fn send_to_login_no(
        &self,
        login_no: i32,
        message: PushMessage,
    ) -> Result<PushDelivery, AppError> {
        if self.client.is_none() {
            return Ok(PushDelivery::Disabled);
        }

        match UserRepository::new(self.db).find_by_login_no(login_no).await? {
            Some(user) => self.send_to_user(&user.login_id, message).await,
            None => Ok(PushDelivery::NoToken),
        }
    }
}

/// Spawns best-effort delivery of `message` to a user onto the runtime.
///
/// Returns immediately. Failures are logged at warn level and never reach the caller.
pub fn spawn_push(
    db: DatabaseConnection,
    client: Option<PushClient>,
    login_no: i32,
    message: PushMessage,
) {
    let Some(client) = client else {
        tracing::debug!("Push disabled, skipping '{}' for user {}", message.title, login_no);
        return;
    };

    tokio::spawn(async move {
        let service = PushService::new(&db, Some(&client));

        match service.send_to_login_no(login_no, message).await {
            Ok(delivery) => {
                tracing::debug!("Push '{}' to user {}: {:?}", message.title, login_no, delivery)
            }
            Err(e) => tracing::warn!(
                "Failed to send push '{}' to user {}: {}",
                message.title,
                login_no,
                e
            ),
        }
    });
}
